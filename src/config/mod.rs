// Config layer - environment-driven settings and logging setup

pub mod logging;
pub mod settings;

pub use logging::init_logging;
pub use settings::{ApplicationSettings, ConfigError, StorageMode};
