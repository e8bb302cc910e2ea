//! Public API for configuration

pub mod loader;
pub mod model;

// Re-export the main entrypoints:
pub use loader::{config_path, load_config, CONFIG_FILE};
pub use model::{ConfigError, DatabaseConfig, LoggingConfig, ProbeConfig};
