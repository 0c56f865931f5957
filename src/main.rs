use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vendor_console::models::{UserInput, Validate};
use vendor_console::{config, db, password, router, AppState, Config};

#[derive(Parser, Debug)]
#[command(name = "vendor_console", version, about = "Vendor management admin console")]
struct Cli {
    /// Override DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Override BIND_ADDRESS
        #[arg(long)]
        bind: Option<String>,
    },
    /// Register an administrator who can log in to the console
    CreateAdmin {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to today
        #[arg(long)]
        joining_date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = config::init()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            serve(config).await
        }
        Command::CreateAdmin {
            name,
            email,
            password,
            joining_date,
        } => create_admin(config, name, email, password, joining_date).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!(
        database = config.database_url(),
        bind_address = config.bind_address.as_str(),
        "Starting vendor console"
    );

    // Initialize database connection
    let db = db::init(&config).await?;
    let app = router(AppState::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!(bind_address = config.bind_address.as_str(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server closed");

    Ok(())
}

async fn create_admin(
    config: Config,
    name: String,
    email: String,
    password: String,
    joining_date: Option<NaiveDate>,
) -> Result<()> {
    let input = UserInput {
        name,
        email,
        phone_no: None,
        dob: None,
        joining_date: joining_date.unwrap_or_else(|| Local::now().date_naive()),
        department: None,
        password: Some(password),
    };
    input.validate()?;

    let secret = input.new_password().context("password must not be empty")?;
    let hash = password::hash_in_background(secret.to_string()).await?;

    let db = db::init(&config).await?;
    let id = db.create_user(&input, &hash).await?;
    db.close().await;

    info!(user_id = id, email = input.email.as_str(), "Administrator created");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, terminating...");
}
