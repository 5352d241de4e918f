//! Configuration management

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Schema applied on startup
    pub schema_path: PathBuf,

    pub bind_addr: SocketAddr,

    pub max_workers: usize,

    /// Uploads larger than this are refused with 413
    pub max_upload_bytes: u64,

    /// Directory holding `listings.csv` / `contacts.csv`; `None` disables seeding
    pub seed_data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let database_path = var_or("DATABASE_PATH", "listing_reports.sqlite3").into();
        let schema_path = var_or("SCHEMA_PATH", "sql/schema.sql").into();
        let bind_addr = parse_var("BIND_ADDR", "127.0.0.1:3000")?;
        let max_workers = parse_var("MAX_WORKERS", "8")?;
        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())?;

        let seed_data_dir = match var_or("SEED_DATA_DIR", "data") {
            dir if dir.trim().is_empty() => None,
            dir => Some(PathBuf::from(dir)),
        };

        Ok(Self {
            database_path,
            schema_path,
            bind_addr,
            max_workers,
            max_upload_bytes,
            seed_data_dir,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(name: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = var_or(name, default);
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}
