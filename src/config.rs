//! Renderer configuration.
//!
//! YAML file with every field optional; missing values fall back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::raster::DEFAULT_SAMPLES_PER_SEGMENT;

/// Canvas used until a script resets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Initial width in pixels.
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Initial height in pixels.
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Background as `[r, g, b]`.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
}

fn default_canvas_size() -> u32 {
    1000
}
fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    /// Background as an opaque color.
    #[must_use]
    pub fn background_color(&self) -> Rgba {
        Rgba::from(self.background)
    }
}

/// Curve sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Parameter samples per Bézier window or B-spline interval.
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
}

fn default_samples_per_segment() -> usize {
    DEFAULT_SAMPLES_PER_SEGMENT
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: default_samples_per_segment(),
        }
    }
}

/// Image output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File extension appended to saved canvas names.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "png".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Initial canvas.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Curve sampling.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Image output.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            curve: CurveConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with the offending line if the YAML is invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration, falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
