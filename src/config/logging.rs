use std::env;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to initialize logging: {0}")]
    Initialization(String),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("file system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Initialize the tracing subscriber from the environment
///
/// `LOG_LEVEL` controls the filter (default INFO); setting `APP_LOG_FILE`
/// adds a daily-rolling file layer next to the console output.
pub fn init_logging() -> Result<(), LoggingError> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let log_file = env::var("APP_LOG_FILE").ok().map(PathBuf::from);

    let env_filter = EnvFilter::try_new(&log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{log_level}: {e}")))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(path) = &log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file_name = path
            .file_name()
            .ok_or_else(|| LoggingError::Initialization("invalid log file path".to_string()))?;
        let file_appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            file_name,
        );
        let file_filter = EnvFilter::try_new(&log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{log_level}: {e}")))?;
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_filter(file_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::Initialization(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::Initialization(e.to_string()))?;
    }

    Ok(())
}
