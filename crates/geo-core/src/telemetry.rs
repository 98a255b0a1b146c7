//! Formatting of the on-screen status block.

use crate::geo::{Cartographic, GeoReading};
use glam::DVec3;
use std::fmt;

/// Values measured for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub camera: DVec3,
    pub eye: Cartographic,
    pub target: Cartographic,
    pub distance: f64,
    /// False when `eye` is the `[0, 0, 0]` stand-in for a missing fix.
    pub eye_resolved: bool,
    /// False when `target` is the `[0, 0, 0]` stand-in.
    pub target_resolved: bool,
}

impl Telemetry {
    pub fn measure(
        camera: DVec3,
        marker: DVec3,
        eye: GeoReading,
        target: GeoReading,
    ) -> Self {
        Self {
            camera,
            eye: eye.or_origin(),
            target: target.or_origin(),
            distance: camera.distance(marker),
            eye_resolved: eye.is_resolved(),
            target_resolved: target.is_resolved(),
        }
    }

    /// Header line followed by camera, eye, sphere and distance lines.
    ///
    /// Only the distance line closes its parenthesis; the three coordinate
    /// lines are left open, matching the text the page has always shown.
    pub fn render(&self, title: &str) -> String {
        let c = self.camera;
        let e = self.eye;
        let t = self.target;
        format!(
            "{title}:\n\
             camera ({}, {}, {}\n\
             eye ({}, {}, {}\n\
             sphere ({}, {}, {}\n\
             distance to rotundan ({})",
            Num(c.x),
            Num(c.y),
            Num(c.z),
            Num(e.longitude),
            Num(e.latitude),
            Num(e.height),
            Num(t.longitude),
            Num(t.latitude),
            Num(t.height),
            Num(self.distance),
        )
    }
}

/// Number text as the browser prints it: shortest round-trip digits, plain
/// decimal for magnitudes in `[1e-6, 1e21)`, exponent form (`1e+21`, `1e-7`)
/// outside it, and `-0` shown as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            return f.write_str("0");
        }
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = v.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{}", v);
        }
        let text = format!("{:e}", v);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_printed_without_rounding() {
        assert_eq!(Num(10.0).to_string(), "10");
        assert_eq!(Num(11.5).to_string(), "11.5");
        assert_eq!(Num(55.613421).to_string(), "55.613421");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(-2.25).to_string(), "-2.25");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Num(1.0000000005838672e-7).to_string(), "1.0000000005838672e-7");
        assert_eq!(Num(1e-7).to_string(), "1e-7");
        assert_eq!(Num(-1e-7).to_string(), "-1e-7");
        assert_eq!(Num(0.000001).to_string(), "0.000001");
        assert_eq!(Num(1e20).to_string(), "100000000000000000000");
        assert_eq!(Num(1e21).to_string(), "1e+21");
        assert_eq!(Num(1.5e300).to_string(), "1.5e+300");
    }

    #[test]
    fn non_finite_values_use_browser_names() {
        assert_eq!(Num(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Num(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Num(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn render_lists_lines_in_order() {
        let t = Telemetry::measure(
            DVec3::ZERO,
            DVec3::new(3.0, 4.0, 0.0),
            GeoReading::Resolved(Cartographic::new(1.0, 2.0, 3.0)),
            GeoReading::Unavailable,
        );
        assert_eq!(
            t.render("Title"),
            "Title:\ncamera (0, 0, 0\neye (1, 2, 3\nsphere (0, 0, 0\ndistance to rotundan (5)"
        );
        assert!(t.eye_resolved);
        assert!(!t.target_resolved);
    }
}
