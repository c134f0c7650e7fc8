//! Editor configuration surface.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration.

use crate::eraser::DEFAULT_ERASER_HALF_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("frame rate must be a positive integer")]
    ZeroFrameRate,

    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for a single editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Playback rate in frames per second. Default: **8**.
    pub frame_rate: u32,

    /// Half the side of the square eraser region. Default: **10**.
    pub eraser_half_size: f64,

    /// Stroke width used by renderers. Default: **3**.
    pub line_width: f64,

    /// Pen ("ink") color as a CSS color string.
    pub ink_color: String,

    /// Canvas background color, also used to show the eraser cursor.
    pub background_color: String,

    /// Timeline thumbnail scale relative to the canvas. Default: **0.1**.
    pub thumbnail_scale: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            frame_rate: 8,
            eraser_half_size: DEFAULT_ERASER_HALF_SIZE,
            line_width: 3.0,
            ink_color: "black".to_string(),
            background_color: "white".to_string(),
            thumbnail_scale: 0.1,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` on malformed input, or the first
    /// validation failure.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields.
    ///
    /// # Errors
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        for (field, value) in [
            ("eraserHalfSize", self.eraser_half_size),
            ("lineWidth", self.line_width),
            ("thumbnailScale", self.thumbnail_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
