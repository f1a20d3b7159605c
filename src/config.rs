//! Configuration management for the motion sentinel

use crate::constants::{
    DEFAULT_CAMERA_INDEX, DEFAULT_CASCADE_PATH, DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR, DEFAULT_TOLERANCE_RATIO,
    WINDOW_TITLE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera configuration
    pub capture: CaptureConfig,

    /// Face detection configuration
    pub detector: DetectorConfig,

    /// Movement classification configuration
    pub movement: MovementConfig,

    /// Display configuration
    pub display: DisplayConfig,

    /// Game rules
    pub game: GameConfig,
}

/// Camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Index of the camera device to open
    pub camera_index: i32,
}

/// Cascade classifier settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path to the Haar cascade XML file
    pub cascade_path: PathBuf,

    /// Pyramid scale step, must be greater than 1.0
    pub scale_factor: f64,

    /// Neighbouring hits required to keep a candidate
    pub min_neighbors: i32,
}

/// Movement classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Fraction of the weighted face size tolerated as jitter
    pub tolerance_ratio: f64,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Preview window title
    pub window_title: String,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stop the session the first time movement is detected
    pub halt_on_movement: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            camera_index: DEFAULT_CAMERA_INDEX,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            cascade_path: PathBuf::from(DEFAULT_CASCADE_PATH),
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            tolerance_ratio: DEFAULT_TOLERANCE_RATIO,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not a valid config.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// The cascade file itself is checked when the detector loads it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !(self.detector.scale_factor.is_finite() && self.detector.scale_factor > 1.0) {
            return Err(Error::ConfigError(
                "Scale factor must be greater than 1.0".to_string(),
            ));
        }
        if self.detector.min_neighbors < 0 {
            return Err(Error::ConfigError(
                "Minimum neighbours must not be negative".to_string(),
            ));
        }
        if !(self.movement.tolerance_ratio.is_finite() && self.movement.tolerance_ratio >= 0.0) {
            return Err(Error::ConfigError(
                "Tolerance ratio must be a non-negative number".to_string(),
            ));
        }
        if self.display.window_title.trim().is_empty() {
            return Err(Error::ConfigError("Window title must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Motion Sentinel Configuration

capture:
  camera_index: 0

# Haar cascade face detector
detector:
  cascade_path: "face_detector.xml"
  scale_factor: 1.3
  min_neighbors: 5

# Allowed per-axis jitter = (width + height / 2) * tolerance_ratio
movement:
  tolerance_ratio: 0.05

display:
  window_title: "Movement Detector"

game:
  halt_on_movement: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_matches_defaults() {
        let parsed = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed = Config::from_yaml("game:\n  halt_on_movement: true\n").unwrap();
        assert!(parsed.game.halt_on_movement);
        assert_eq!(parsed.movement.tolerance_ratio, DEFAULT_TOLERANCE_RATIO);
        assert_eq!(parsed.detector.min_neighbors, DEFAULT_MIN_NEIGHBORS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.detector.scale_factor = 1.0;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::default();
        config.detector.min_neighbors = -1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.movement.tolerance_ratio = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.window_title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Config::from_yaml("movement: [1, 2");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
