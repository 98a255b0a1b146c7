//! Session configuration and the built-in demo presets.

use crate::constants::*;
use crate::error::ConfigError;
use crate::geo::Cartographic;
use crate::scene::{GeoAnchor, Marker};
use std::fmt;
use std::str::FromStr;

/// Built-in anchor/sphere presets. They differ only in radius and longitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Rotundan,
    RotundanSmall,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Rotundan, Variant::RotundanSmall];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Rotundan => "rotundan",
            Variant::RotundanSmall => "rotundan-small",
        }
    }

    pub fn config(self) -> SessionConfig {
        match self {
            Variant::Rotundan => SessionConfig::default(),
            Variant::RotundanSmall => SessionConfig {
                longitude: DEFAULT_LONGITUDE + SMALL_LONGITUDE_SHIFT_DEG,
                radius: SMALL_RADIUS,
                ..SessionConfig::default()
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownVariant(wanted.to_string()))
    }
}

/// Everything the scene initializer needs: where the anchor is, how big the
/// sphere is, and what the status header says.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub anchor_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    pub radius: f64,
    pub color: u32,
    pub title: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            anchor_name: DEFAULT_ANCHOR_NAME.to_string(),
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
            height: 0.0,
            radius: DEFAULT_RADIUS,
            color: MARKER_COLOR,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::Latitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::Longitude(self.longitude));
        }
        if !self.height.is_finite() {
            return Err(ConfigError::Height(self.height));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::Radius(self.radius));
        }
        Ok(())
    }

    pub fn anchor_position(&self) -> Cartographic {
        Cartographic::new(self.longitude, self.latitude, self.height)
    }

    pub fn anchor(&self) -> GeoAnchor {
        GeoAnchor::new(self.anchor_name.clone(), self.anchor_position())
    }

    pub fn marker(&self) -> Marker {
        Marker::sphere(self.radius, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_only_in_radius_and_longitude() {
        let big = Variant::Rotundan.config();
        let small = Variant::RotundanSmall.config();
        assert_eq!(big.radius, 1000.0);
        assert_eq!(small.radius, 500.0);
        assert_ne!(big.longitude, small.longitude);
        assert_eq!(big.latitude, small.latitude);
        assert_eq!(big.anchor_name, small.anchor_name);
        assert_eq!(big.color, small.color);
    }

    #[test]
    fn variant_names_parse_case_insensitively() {
        assert_eq!("Rotundan".parse::<Variant>(), Ok(Variant::Rotundan));
        assert_eq!(
            " rotundan-small ".parse::<Variant>(),
            Ok(Variant::RotundanSmall)
        );
        assert!(matches!(
            "torso".parse::<Variant>(),
            Err(ConfigError::UnknownVariant(_))
        ));
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let mut cfg = SessionConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.latitude = 91.0;
        assert_eq!(cfg.validate(), Err(ConfigError::Latitude(91.0)));
        cfg = SessionConfig {
            radius: 0.0,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Radius(0.0)));
        cfg = SessionConfig {
            longitude: f64::NAN,
            ..SessionConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Longitude(_))));
    }
}
