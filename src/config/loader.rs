//! Configuration loading and discovery for `pxm.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PxmConfig;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up on disk
pub const CONFIG_FILE_NAME: &str = "pxm.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxm.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override morph step count
    pub steps: Option<u32>,
    /// Override frame delay in milliseconds
    pub frame_delay_ms: Option<u64>,
    /// Override terminal display scale
    pub scale: Option<u32>,
}

/// Find pxm.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find pxm.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Move to parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file (which must exist). Otherwise
/// uses [`find_config`]; when nothing is found the defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<PxmConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PxmConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PxmConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PxmConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PxmConfig, overrides: &CliOverrides) {
    if let Some(steps) = overrides.steps {
        config.morph.steps = steps;
    }
    if let Some(delay) = overrides.frame_delay_ms {
        config.morph.frame_delay_ms = delay;
    }
    if let Some(scale) = overrides.scale {
        config.display.scale = scale;
    }
}
