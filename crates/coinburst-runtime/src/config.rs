//! Run settings for the host loop

use coinburst_core::{CoinburstError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewport and frame-rate settings for a run of the effect loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels, used as the respawn boundary
    pub height: f32,
    /// Target frames per second
    pub fps: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 450.0,
            fps: 60.0,
        }
    }
}

impl RunConfig {
    /// Parse and validate run settings from TOML text. Missing keys keep
    /// their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a run settings file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Viewport dimensions and frame rate must be finite and positive
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width as f64),
            ("height", self.height as f64),
            ("fps", self.fps),
        ] {
            if !value.is_finite() {
                return Err(CoinburstError::NonFiniteValue {
                    field: field.to_string(),
                    value,
                });
            }
            if value <= 0.0 {
                return Err(CoinburstError::InvalidConfig(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
