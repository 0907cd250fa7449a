//! Logging bootstrap.
//!
//! Log lines go to stderr. `RUST_LOG` wins over the configured level when set.

use flexi_logger::{Logger, LoggerHandle};

/// Starts the global logger. Keep the returned handle alive for the lifetime of the process.
pub fn init_logging(level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}
