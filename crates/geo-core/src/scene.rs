//! The two scene objects the demo creates: a sphere and the geo anchor it
//! hangs from. Both are immutable once built.

use crate::constants::{MARKER_COLOR, SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS};
use crate::geo::Cartographic;

/// Renderable sphere placed at the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub radius: f64,
    pub color: u32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Marker {
    pub fn sphere(radius: f64, color: u32) -> Self {
        Self {
            radius,
            color,
            width_segments: SPHERE_WIDTH_SEGMENTS,
            height_segments: SPHERE_HEIGHT_SEGMENTS,
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::sphere(1.0, MARKER_COLOR)
    }
}

/// Named entity fixed at a geographic position.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoAnchor {
    name: String,
    position: Cartographic,
}

impl GeoAnchor {
    pub fn new(name: impl Into<String>, position: Cartographic) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Cartographic {
        self.position
    }
}
