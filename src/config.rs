//! Navigation configuration.
//!
//! Thresholds the decision engine and sensor adapter compare against. The
//! defaults match the vehicle's stock calibration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable thresholds for sensing and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Reflectance at or below which a wheel sensor is over boundary tape.
    pub reflectance_threshold: f64,
    /// Forward distance at or above which the path ahead is open.
    pub forward_clearance_mm: f64,
    /// Forward distance at or below which the vehicle must back up.
    pub backup_distance_mm: f64,
    /// Millimeters per volt of the distance sensor (4000 mm over 5 V).
    pub mm_per_volt: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            reflectance_threshold: 1.0,
            forward_clearance_mm: 200.0,
            backup_distance_mm: 50.0,
            mm_per_volt: 4000.0 / 5.0,
        }
    }
}

impl NavigationConfig {
    /// Checks that the thresholds describe a usable configuration.
    ///
    /// # Errors
    /// - `NonFinite`: any field is NaN or infinite
    /// - `InvertedDistanceBands`: the backup band reaches the forward band
    /// - `NonPositiveScale`: `mm_per_volt <= 0`
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("reflectance_threshold", self.reflectance_threshold),
            ("forward_clearance_mm", self.forward_clearance_mm),
            ("backup_distance_mm", self.backup_distance_mm),
            ("mm_per_volt", self.mm_per_volt),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.backup_distance_mm >= self.forward_clearance_mm {
            return Err(ConfigError::InvertedDistanceBands {
                backup_mm: self.backup_distance_mm,
                forward_mm: self.forward_clearance_mm,
            });
        }

        if self.mm_per_volt <= 0.0 {
            return Err(ConfigError::NonPositiveScale {
                value: self.mm_per_volt,
            });
        }

        Ok(self)
    }

    /// Parses a JSON document and validates it. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON, otherwise any
    /// [`validate`](Self::validate) failure.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()
    }
}
