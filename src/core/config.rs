//! Generator configuration loading
//!
//! Every generator has a plain config record with documented defaults.
//! Records can be read from TOML presets (see `data/presets/`); missing keys
//! fall back to the defaults through `#[serde(default)]`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::core::error::{GenError, Result};

/// Shared behaviour of the per-generator config records
pub trait GeneratorConfig: DeserializeOwned + Default {
    /// Validate configuration for internal consistency
    fn validate(&self) -> std::result::Result<(), String>;
}

/// Parse a config record from TOML text and validate it
pub fn parse_config<T: GeneratorConfig>(content: &str) -> Result<T> {
    let config: T = toml::from_str(content)?;
    config.validate().map_err(GenError::InvalidConfig)?;
    Ok(config)
}

/// Load a config record from a TOML file
pub fn load_config<T: GeneratorConfig>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("Loaded config from {:?}", path);
    parse_config(&content)
}

/// Path of a bundled preset
pub fn preset_path(name: &str) -> PathBuf {
    PathBuf::from("data/presets").join(format!("{}.toml", name))
}
