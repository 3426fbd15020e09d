//! Analysis configuration file support.
//!
//! This module provides utilities for reading histogram and rendering settings from TOML
//! configuration files:
//!
//! ```toml
//! [histogram]
//! bin_width_deg = 15.0
//!
//! [render]
//! transformation = "clock"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::circular::ValueType;
use crate::error::ConfigError;
use crate::transformation::AngleTransformation;

/// Analysis configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub histogram: HistogramSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

/// Histogram settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSettings {
    #[serde(default = "default_bin_width_deg")]
    pub bin_width_deg: f64,
}

/// Rendering boundary settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub transformation: AngleTransformation,
}

fn default_bin_width_deg() -> f64 {
    15.0
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bin_width_deg: default_bin_width_deg(),
        }
    }
}

impl AnalysisConfig {
    /// Load analysis configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AnalysisConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate analysis configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load analysis configuration from the default location.
    ///
    /// Searches for `circular.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("circular.toml"),
            PathBuf::from("config/circular.toml"),
            PathBuf::from("../circular.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using analysis configuration {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::Invalid(
            "No circular.toml found in standard locations".to_string(),
        ))
    }

    /// Check that the histogram width is usable for both value kinds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.histogram.bin_width_deg;
        if !width.is_finite() || width <= 0.0 || width > 180.0 {
            return Err(ConfigError::Invalid(format!(
                "histogram.bin_width_deg must be in range (0..180] and not: {}",
                width
            )));
        }
        Ok(())
    }

    /// Histogram bin width in radians.
    pub fn bin_width_radians(&self) -> f64 {
        ValueType::Degrees.to_radians(self.histogram.bin_width_deg)
    }
}
