//! Vendor management console: REST API over departments, employees,
//! projects and administrators.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod password;

pub use api::{router, AppState};
pub use config::Config;
pub use db::Database;
