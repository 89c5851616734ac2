//! Tunable round settings
//!
//! Stored as JSON next to the best time record. Missing fields fall back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::persistence::PersistenceError;

/// Packing and round settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Packing ===
    /// Random candidate centers drawn per packing
    pub max_attempts: u32,
    /// Radius cap so no single circle dominates the layout
    pub upper_radius_bound: f32,
    /// Candidates must exceed this radius to be kept
    pub lower_radius_bound: f32,

    // === Round ===
    /// How many of the largest circles get a label
    pub numbered_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            upper_radius_bound: UPPER_RADIUS_BOUND,
            lower_radius_bound: LOWER_RADIUS_BOUND,
            numbered_count: NUMBERED_COUNT,
        }
    }
}

impl Settings {
    /// Check that the settings can produce a playable round
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.numbered_count == 0 {
            return Err(ConfigError::ZeroNumberedCount);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let lower = self.lower_radius_bound;
        let upper = self.upper_radius_bound;
        let bounds_ok = lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper;
        if !bounds_ok {
            return Err(ConfigError::InvalidRadiusBounds { lower, upper });
        }

        Ok(())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings in {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings from {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
