//! Configuration loading
//!
//! Reads an optional TOML config file from the platform config directory
//! (or an explicit path). A missing file means defaults; a present but
//! unparseable file is a startup error.

mod types;

use std::path::{Path, PathBuf};

use crate::error::SokoError;

pub use types::{Config, EndpointConfig, FilterConfig, TimingConfig};

/// Default location: `<config dir>/soko/config.toml`
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("soko").join("config.toml"))
}

/// Load configuration, falling back to defaults when no file exists
pub fn load(explicit: Option<&Path>) -> Result<Config, SokoError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        // An explicitly requested file must exist; the default one need not
        if explicit.is_some() {
            return Err(SokoError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    parse(&contents)
}

/// Parse TOML config contents
pub fn parse(contents: &str) -> Result<Config, SokoError> {
    toml::from_str(contents).map_err(|e| SokoError::Config(e.to_string()))
}
