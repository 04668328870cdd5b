//! Mission settings
//!
//! Read from the `MARS_ROVER_SETTINGS` environment variable as JSON; any
//! field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::RoverError;
use crate::sim::{Bounds, Pose};

/// Mission configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Inclusive grid bounds
    pub bounds: Bounds,
    /// Requested landing cell and heading
    pub start: Pose,
    /// Obstacle layout seed (random when absent)
    pub seed: Option<u64>,
    /// List obstacle cells before landing
    pub reveal_obstacles: bool,
}

impl Settings {
    /// Environment variable holding a JSON settings document
    pub const ENV_VAR: &'static str = "MARS_ROVER_SETTINGS";

    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, RoverError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.bounds.validated()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, RoverError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// Settings for a raw `ENV_VAR` value; unset or invalid gives defaults
    fn from_env_value(value: Option<&str>) -> Self {
        let Some(json) = value else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", Self::ENV_VAR, e);
                Self::default()
            }
        }
    }
}
