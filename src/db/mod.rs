use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;

mod assignments;
mod dashboard;
mod departments;
mod employees;
mod projects;
mod users;

/// Storage handle shared by every request.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(
            config.database_url(),
            config.max_connections,
            config.acquire_timeout(),
        )
        .await
    }

    /// Open a pool against `url`.
    ///
    /// In-memory databases live only as long as their connection, so they
    /// are held on a single connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url {url}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = url.contains(":memory:");
        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);
        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("failed to open database pool")?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Bring the schema up to date.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(self.get_pool())
            .await
            .context("failed to apply migrations")?;
        Ok(())
    }

    /// Round-trip a trivial statement to prove the store is reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(self.get_pool())
            .await
            .context("database ping failed")?;
        Ok(())
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Initialize the database connection pool and apply migrations
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;
    db.migrate().await?;

    info!(
        database = config.database_url(),
        max_connections = config.max_connections,
        "Database ready"
    );

    Ok(db)
}

#[cfg(test)]
pub(crate) async fn test_db() -> Database {
    let db = Database::connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    db.migrate().await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let db = test_db().await;
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn ping_fails_after_close() {
        let db = test_db().await;
        db.close().await;
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.migrate().await.unwrap();
    }
}
