//! Simulation parameters
//!
//! All fixed constants of a run live here: viewport bounds, restitution,
//! supersaturation kinetics, and the stochastic event probabilities.
//! Validated once at initialization; the per-tick code assumes a valid
//! config and never re-checks ranges.

use serde::{Deserialize, Serialize};

/// Fixed configuration for one simulation instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Viewport width (x-axis bound for reflection)
    pub width: f32,
    /// Viewport height (y-axis bound for reflection)
    pub height: f32,
    /// Coefficient of restitution `e` in [0, 1]; 1.0 = perfectly elastic
    pub restitution: f32,
    /// Population size at simulation start
    pub initial_particles: usize,
    /// Supersaturation at simulation start
    pub initial_supersaturation: f32,
    /// Floor for supersaturation decay; growth stops at or below this
    pub critical_concentration: f32,
    /// Supersaturation lost per tick
    pub nucleation_rate: f32,
    /// Per-pair chance of a merge in [0, 1]
    pub agglomeration_probability: f32,
    /// Per-pair chance of a split in [0, 1], checked after agglomeration
    pub breakage_probability: f32,
    /// Minimum initial particle radius
    pub min_radius: f32,
    /// Maximum initial particle radius
    pub max_radius: f32,
    /// Velocity components are drawn uniformly from [-max_speed, max_speed]
    pub max_speed: f32,
    /// Breakage children are offset per-axis by up to this much from the parent
    pub breakage_jitter: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            restitution: 0.8,
            initial_particles: 100,
            initial_supersaturation: 1.0,
            critical_concentration: 0.05,
            nucleation_rate: 0.01,
            agglomeration_probability: 0.02,
            breakage_probability: 0.02,
            min_radius: 5.0,
            max_radius: 10.0,
            max_speed: 5.0,
            breakage_jitter: 10.0,
        }
    }
}

/// A configuration value rejected at initialization
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability or the restitution coefficient fell outside [0, 1]
    UnitRange { field: &'static str, value: f32 },
    /// A dimension, radius, speed, or rate that must be positive/non-negative
    OutOfRange { field: &'static str, value: f32 },
    /// `min_radius` exceeds `max_radius`
    RadiusOrder { min: f32, max: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnitRange { field, value } => {
                write!(f, "{field} must lie in [0, 1], got {value}")
            }
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{field} is out of range: {value}")
            }
            ConfigError::RadiusOrder { min, max } => {
                write!(f, "min_radius ({min}) exceeds max_radius ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Check every constant against its allowed range.
    ///
    /// Probabilities and restitution must lie in [0, 1]; dimensions, radii,
    /// speed, and jitter must be positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("restitution", self.restitution),
            ("agglomeration_probability", self.agglomeration_probability),
            ("breakage_probability", self.breakage_probability),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::UnitRange { field, value });
            }
        }

        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("max_speed", self.max_speed),
            ("breakage_jitter", self.breakage_jitter),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        for (field, value) in [
            ("initial_supersaturation", self.initial_supersaturation),
            ("critical_concentration", self.critical_concentration),
            ("nucleation_rate", self.nucleation_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        if self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusOrder {
                min: self.min_radius,
                max: self.max_radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_probability_above_one() {
        let config = SimConfig {
            agglomeration_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnitRange {
                field: "agglomeration_probability",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_restitution() {
        let config = SimConfig {
            restitution: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnitRange {
                field: "restitution",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = SimConfig {
            width: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let config = SimConfig {
            min_radius: 12.0,
            max_radius: 6.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RadiusOrder {
                min: 12.0,
                max: 6.0
            })
        );
    }

    #[test]
    fn test_roundtrips_through_json() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.initial_particles, config.initial_particles);
        assert_eq!(back.restitution, config.restitution);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let back: SimConfig = serde_json::from_str(r#"{"restitution": 0.5}"#).unwrap();
        assert_eq!(back.restitution, 0.5);
        assert_eq!(back.width, 800.0);
    }
}
