//! Configuration system
//!
//! Configuration files are TOML or RON, picked by file extension.

pub use serde::{Deserialize, Serialize};

use crate::steering::DEFAULT_EASING;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its usable range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Steering and tick settings for a moveable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Maximum velocity of new moveables
    pub max_velocity: f32,

    /// Easing coefficient for target steering
    pub easing: f32,

    /// Frame rate of the driving loop
    pub fps: u32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_velocity: 20.0,
            easing: DEFAULT_EASING,
            fps: 60,
        }
    }
}

impl Config for SteeringConfig {}

impl SteeringConfig {
    /// Check that the settings can drive a simulation
    ///
    /// Only `fps` is restricted. Zero or negative velocities and easings are
    /// accepted, matching [`Moveable`](crate::Moveable).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.max_velocity.is_finite() || !self.easing.is_finite() {
            return Err(ConfigError::Invalid {
                field: "max_velocity/easing",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}
