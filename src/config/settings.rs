use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),

    #[error("environment variable {name} is invalid: {message}")]
    InvalidVar { name: &'static str, message: String },
}

/// Which store adapter backs the application
#[derive(Debug, Clone)]
pub enum StorageMode {
    /// Whole-collection JSON blobs in a directory
    Local { dir: PathBuf },
    /// Document table in a database
    Remote { database_url: String },
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub bind_addr: String,
    pub storage: StorageMode,
    pub session_secret: String,
    pub session_minutes: i64,
    /// Seed values for the admin credentials record, used only when the
    /// record does not exist yet
    pub admin_username: String,
    pub admin_password: String,
}

impl ApplicationSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let storage = match env::var("STORAGE_MODE").as_deref() {
            Ok("local") => StorageMode::Local {
                dir: env::var("LOCAL_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data")),
            },
            Ok("remote") | Err(_) => StorageMode::Remote {
                database_url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://rtrw.db?mode=rwc".to_string()),
            },
            Ok(other) => {
                return Err(ConfigError::InvalidVar {
                    name: "STORAGE_MODE",
                    message: format!("expected \"local\" or \"remote\", got \"{other}\""),
                })
            }
        };

        let session_secret =
            env::var("SESSION_SECRET").map_err(|_| ConfigError::MissingVar("SESSION_SECRET"))?;

        let session_minutes = match env::var("SESSION_MINUTES") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "SESSION_MINUTES",
                message: format!("expected a number of minutes, got \"{raw}\""),
            })?,
            Err(_) => 60,
        };

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

        Ok(Self {
            bind_addr,
            storage,
            session_secret,
            session_minutes,
            admin_username,
            admin_password,
        })
    }
}
