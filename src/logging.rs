//! File-backed tracing setup. The terminal belongs to the UI, so log output
//! goes to a daily-rolling file instead of stderr.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Install the global subscriber. Keep the returned guard alive for the whole
/// process, dropping it flushes and stops the background writer.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard, ConfigError> {
    let level = config.level()?;
    let file_appender = file_appender(config)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigError::Validation(format!("logging already initialised: {e}")))?;
    tracing::info!(level = %level, directory = %config.directory.display(), "logging initialised");
    Ok(guard)
}

/// Daily-rolling appender in `config.directory`, created if missing.
fn file_appender(config: &LoggingConfig) -> Result<RollingFileAppender, ConfigError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(config.file_name.clone())
        .build(&config.directory)?;
    Ok(appender)
}

/// Parse a level name such as `"debug"` or `"WARN"`.
pub fn parse_level(name: &str) -> Result<Level, ConfigError> {
    name.parse::<Level>()
        .map_err(|_| ConfigError::Validation(format!("logging.level '{name}' is not a valid level")))
}
