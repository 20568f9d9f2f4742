//! Configuration schema types for `pxm.toml`
//!
//! Defines the structure and validation rules for pixmorph settings.

use serde::{Deserialize, Serialize};

/// Morph animation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphConfig {
    /// Number of blend steps (frames = steps + 1)
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Pause after each frame, in milliseconds
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self { steps: default_steps(), frame_delay_ms: default_frame_delay_ms() }
    }
}

fn default_steps() -> u32 {
    10
}

fn default_frame_delay_ms() -> u64 {
    500
}

/// Terminal display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Half cells per pixel edge when drawing to the terminal
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { scale: default_scale() }
    }
}

fn default_scale() -> u32 {
    1
}

/// Largest accepted terminal scale, for both `[display] scale` and `--zoom`
pub const MAX_DISPLAY_SCALE: u32 = 32;

/// Root of `pxm.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PxmConfig {
    #[serde(default)]
    pub morph: MorphConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// A config validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "morph.steps")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxm.toml: '{}' {}", self.field, self.message)
    }
}

impl PxmConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.morph.steps == 0 {
            errors.push(ConfigValidationError {
                field: "morph.steps".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.display.scale == 0 {
            errors.push(ConfigValidationError {
                field: "display.scale".to_string(),
                message: "must be a positive integer".to_string(),
            });
        } else if self.display.scale > MAX_DISPLAY_SCALE {
            errors.push(ConfigValidationError {
                field: "display.scale".to_string(),
                message: format!("must be at most {}", MAX_DISPLAY_SCALE),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Frame delay as a `Duration`
    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.morph.frame_delay_ms)
    }
}
