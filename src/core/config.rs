//! Tuning constants for the particle field
//!
//! Every number that shapes the effect lives here with its default. Hosts
//! may override any subset from JSON; missing keys keep their defaults.

use serde::Deserialize;
use tracing::debug;

use super::field::FIELD_CAPACITY;
use crate::error::{FieldError, Result};
use crate::theme::colors;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // === Population ===
    /// Viewport area (px²) per particle
    pub area_per_particle: f32,
    pub min_count: usize,
    pub max_count: usize,

    // === Spawn ranges ===
    /// Initial velocity components are drawn from [-max, max]
    pub max_initial_speed: f32,
    pub radius_range: [f32; 2],
    pub opacity_range: [f32; 2],

    // === Physics ===
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    /// Multiplier applied when the repulsion force overwrites velocity
    pub repulsion_boost: f32,
    pub velocity_damping: f32,
    /// Fraction of the offset to the anchor removed each step
    pub return_strength: f32,
    /// Off-screen buffer before a particle wraps to the far edge
    pub wrap_margin: f32,

    // === Rendering ===
    pub connection_distance: f32,
    /// Line alpha at zero distance
    pub connection_alpha: f32,
    pub line_width: f32,
    /// Glow disc radius as a multiple of the particle radius
    pub glow_scale: f32,
    pub color: [u8; 3],

    /// Fixed RNG seed for reproducible layouts; entropy when absent
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 8000.0,
            min_count: 100,
            max_count: FIELD_CAPACITY,
            max_initial_speed: 0.15,
            radius_range: [1.0, 2.5],
            opacity_range: [0.3, 0.7],
            repulsion_radius: 150.0,
            repulsion_strength: 1.2,
            repulsion_boost: 2.0,
            velocity_damping: 0.88,
            return_strength: 0.015,
            wrap_margin: 50.0,
            connection_distance: 120.0,
            connection_alpha: 0.5,
            line_width: 0.8,
            glow_scale: 3.0,
            color: colors::NODE.into(),
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Loaded field config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: impl Into<String>) -> Result<()> {
            Err(FieldError::InvalidConfig(msg.into()))
        }

        if !(self.area_per_particle > 0.0) {
            return invalid("area_per_particle must be positive");
        }
        if self.min_count > self.max_count {
            return invalid("min_count exceeds max_count");
        }
        if self.max_count > FIELD_CAPACITY {
            return invalid(format!("max_count exceeds capacity of {FIELD_CAPACITY}"));
        }
        if !(self.max_initial_speed >= 0.0) {
            return invalid("max_initial_speed must be non-negative");
        }
        for (name, [lo, hi]) in [("radius_range", self.radius_range), ("opacity_range", self.opacity_range)] {
            if !(lo >= 0.0 && lo <= hi) {
                return invalid(format!("{name} must satisfy 0 <= min <= max"));
            }
        }
        if self.opacity_range[1] > 1.0 {
            return invalid("opacity_range must stay within [0, 1]");
        }
        // Damping of 1 would let idle particles drift forever
        if !(self.velocity_damping > 0.0 && self.velocity_damping < 1.0) {
            return invalid("velocity_damping must be in (0, 1)");
        }
        for (name, value) in [
            ("repulsion_strength", self.repulsion_strength),
            ("repulsion_boost", self.repulsion_boost),
        ] {
            if !(value >= 0.0) {
                return invalid(format!("{name} must be non-negative"));
            }
        }
        if !(self.connection_alpha >= 0.0 && self.connection_alpha <= 1.0) {
            return invalid("connection_alpha must be in [0, 1]");
        }
        if !(self.return_strength >= 0.0 && self.return_strength <= 1.0) {
            return invalid("return_strength must be in [0, 1]");
        }
        for (name, value) in [
            ("repulsion_radius", self.repulsion_radius),
            ("connection_distance", self.connection_distance),
            ("line_width", self.line_width),
            ("glow_scale", self.glow_scale),
        ] {
            if !(value > 0.0) {
                return invalid(format!("{name} must be positive"));
            }
        }
        if !(self.wrap_margin >= 0.0) {
            return invalid("wrap_margin must be non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FieldConfig::from_json(r#"{"connection_distance": 90.0, "seed": 7}"#).unwrap();
        assert_eq!(config.connection_distance, 90.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.repulsion_radius, 150.0);
        assert_eq!(config.color, [100, 150, 255]);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = FieldConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FieldError::Config(_)));
    }

    #[test]
    fn rejects_capacity_overflow() {
        let err = FieldConfig::from_json(r#"{"max_count": 1000}"#).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = FieldConfig {
            radius_range: [3.0, 1.0],
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FieldConfig {
            min_count: 200,
            max_count: 150,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_damping() {
        for damping in [0.0, -0.5, 1.0, 1.5, f32::NAN] {
            let config = FieldConfig {
                velocity_damping: damping,
                ..FieldConfig::default()
            };
            assert!(config.validate().is_err(), "damping {damping} should be rejected");
        }
    }

    #[test]
    fn rejects_attraction_and_negative_alpha() {
        for json in [
            r#"{"repulsion_strength": -5.0}"#,
            r#"{"repulsion_boost": -1.0}"#,
            r#"{"connection_alpha": -1.0}"#,
            r#"{"connection_alpha": 1.5}"#,
            r#"{"velocity_damping": 1.0, "repulsion_strength": -5.0, "connection_alpha": -1.0}"#,
        ] {
            let err = FieldConfig::from_json(json).unwrap_err();
            assert!(matches!(err, FieldError::InvalidConfig(_)), "{json} should be rejected");
        }
    }

    #[test]
    fn default_color_is_node_palette() {
        assert_eq!(crate::theme::Rgb::from(FieldConfig::default().color), colors::NODE);
    }
}
