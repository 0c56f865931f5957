use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the console server
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Upper bound on pooled storage connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_database_url() -> String {
    "sqlite://vendor_console.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Read `.env` (when present) and then the process environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Ok(envy::from_env::<Config>()?)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Load configuration for the running process.
pub fn init() -> Result<Config> {
    Config::load()
}
