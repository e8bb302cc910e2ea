// src/config/loader.rs

//! # Configuration Loader
//!
//! Reads `journal_probe.toml` from next to the executable and deserializes it
//! into `ProbeConfig`. A missing file is not an error: every table has defaults.

use std::{fs, io, path::Path, path::PathBuf};

use crate::config::model::{ConfigError, ProbeConfig};

/// File name looked up next to the executable.
pub const CONFIG_FILE: &str = "journal_probe.toml";

/// Location of the config file for a given executable directory.
pub fn config_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(CONFIG_FILE)
}

/// Load and parse the probe configuration from `path`.
/// Falls back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    log::debug!("Reading config from {:?}", path);
    let txt = match fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(ProbeConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let cfg: ProbeConfig = toml::from_str(&txt)?;
    log::info!("Loaded config from {:?}", path);
    Ok(cfg)
}
