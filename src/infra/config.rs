//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_FRONTEND_DIR: &str = "./frontend";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Store connection string (`postgres://...` or `sqlite:...`). Required, no default.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Directory served under `/frontend`.
    pub frontend_dir: PathBuf,
    pub max_connections: u32,
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the process environment (after loading `.env`).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8080")?;

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR));

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32")?
                .max(1),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_level = log_level(&lookup);

        Ok(Self {
            database_url,
            bind_addr,
            frontend_dir,
            max_connections,
            log_level,
        })
    }
}

/// `LOG_LEVEL` or the default. Shared by every binary; `RUST_LOG` still wins at logger start.
pub fn log_level<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_LEVEL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
