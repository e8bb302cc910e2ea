// src/config/model.rs

use serde::Deserialize;
use std::{env, path::PathBuf};
use thiserror::Error;

/// Top-level runtime config, mirror of `journal_probe.toml`
#[derive(Debug, Default, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)] pub logging:  LoggingConfig,
    #[serde(default)] pub database: DatabaseConfig,
}

/// Mirror of the `[logging]` table
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]            pub enable: bool,
    #[serde(default)]            pub file:   Option<String>,
    #[serde(default = "default_level")] pub level: String,
}
fn default_level() -> String { "WARN".into() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enable: false, file: None, level: default_level() }
    }
}

/// Mirror of the `[database]` table
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Directory the scratch database files are created in.
    #[serde(default = "default_temp_dir")]
    pub temp_dir:              PathBuf,
    /// File name prefix; a fresh UUID is appended per database.
    #[serde(default = "default_file_prefix")]
    pub file_prefix:           String,
    /// Create the `dummy` table before probing in the same-connection scenarios.
    #[serde(default)]
    pub populate_dummy_schema: bool,
}
fn default_temp_dir() -> PathBuf { env::temp_dir() }
fn default_file_prefix() -> String { "test_journal_mode_sqlite".into() }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            temp_dir:              default_temp_dir(),
            file_prefix:           default_file_prefix(),
            populate_dummy_schema: false,
        }
    }
}

/// All the ways config loading can go wrong
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
