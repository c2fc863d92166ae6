//! Configuration file support.
//!
//! Settings for the palette synthesizer and the inspection CLI are read from
//! a TOML file. Every section and key is optional.
//!
//! ```toml
//! [palette]
//! cartoon_brightness = 1.5
//! unspecified_subclass = 4.5
//!
//! [output]
//! pretty = true
//! include_classification = true
//! include_temperature = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SpectraError, SpectraResult};

/// Configuration loaded from `spectra.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectraConfig {
    #[serde(default)]
    pub palette: PaletteSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Palette synthesis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    /// Brightening exponent applied to the glow to obtain the cartoon colour.
    #[serde(default = "default_cartoon_brightness")]
    pub cartoon_brightness: f64,
    /// Subclass assumed when a classification gives none.
    #[serde(default = "default_unspecified_subclass")]
    pub unspecified_subclass: f64,
}

/// Output settings for the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default = "default_true")]
    pub include_classification: bool,
    #[serde(default = "default_true")]
    pub include_temperature: bool,
}

fn default_cartoon_brightness() -> f64 {
    1.5
}

fn default_unspecified_subclass() -> f64 {
    4.5
}

fn default_true() -> bool {
    true
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            cartoon_brightness: default_cartoon_brightness(),
            unspecified_subclass: default_unspecified_subclass(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            include_classification: true,
            include_temperature: true,
        }
    }
}

impl SpectraConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(SpectraConfig)` if the file was read, parsed and validated
    /// * `Err(SpectraError::ConfigurationError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> SpectraResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SpectraError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Parse errors name the offending key, e.g. `palette.cartoon_brightness`.
    pub fn from_toml_str(content: &str) -> SpectraResult<Self> {
        let deserializer = toml::Deserializer::new(content);
        let config: SpectraConfig = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            SpectraError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location, or defaults if none exists.
    ///
    /// Searches for `spectra.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn load_default() -> SpectraResult<Self> {
        let search_paths = [
            PathBuf::from("spectra.toml"),
            PathBuf::from("rust_backend/spectra.toml"),
            PathBuf::from("../spectra.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn validate(&self) -> SpectraResult<()> {
        let brightness = self.palette.cartoon_brightness;
        if !brightness.is_finite() || brightness < 0.0 {
            return Err(SpectraError::ConfigurationError(format!(
                "'palette.cartoon_brightness' must be a non-negative number, got {}",
                brightness
            )));
        }

        let subclass = self.palette.unspecified_subclass;
        if !(0.0..=9.0).contains(&subclass) {
            return Err(SpectraError::ConfigurationError(format!(
                "'palette.unspecified_subclass' must be within 0..=9, got {}",
                subclass
            )));
        }

        Ok(())
    }
}
