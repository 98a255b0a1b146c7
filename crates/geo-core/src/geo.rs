//! Geographic coordinates and the local tangent frame used to place anchors.
//!
//! Positions are `[longitude, latitude, height]` in degrees, degrees and
//! metres, on the WGS84 ellipsoid. The local frame is east-north-up around an
//! origin fix, re-expressed in the y-up axes the renderer uses
//! (`x = east`, `y = up`, `z = -north`).

use crate::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_M};
use glam::DVec3;

/// A geographic position in degrees (height in metres above the ellipsoid).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    pub const ORIGIN: Cartographic = Cartographic {
        longitude: 0.0,
        latitude: 0.0,
        height: 0.0,
    };

    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Ground-level position; height defaults to zero.
    pub fn from_degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, 0.0)
    }

    /// Accepts `[lon, lat]` or `[lon, lat, height]`; anything else is rejected.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [lon, lat] => Some(Self::from_degrees(lon, lat)),
            [lon, lat, h] => Some(Self::new(lon, lat, h)),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite() && self.height.is_finite()
    }

    /// Earth-centred, earth-fixed position in metres.
    pub fn to_ecef(&self) -> DVec3 {
        let e2 = eccentricity_sq();
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        let n = WGS84_SEMI_MAJOR_M / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        DVec3::new(
            (n + self.height) * cos_lat * cos_lon,
            (n + self.height) * cos_lat * sin_lon,
            (n * (1.0 - e2) + self.height) * sin_lat,
        )
    }

    /// Inverse of [`Cartographic::to_ecef`] (fixed-point iteration on latitude).
    pub fn from_ecef(p: DVec3) -> Self {
        let e2 = eccentricity_sq();
        let a = WGS84_SEMI_MAJOR_M;
        let b = a * (1.0 - WGS84_FLATTENING);
        let rho = (p.x * p.x + p.y * p.y).sqrt();
        if rho < 1e-9 {
            let latitude = if p.z >= 0.0 { 90.0 } else { -90.0 };
            return Self::new(0.0, latitude, p.z.abs() - b);
        }
        let lon = p.y.atan2(p.x);
        let mut lat = p.z.atan2(rho * (1.0 - e2));
        let mut height = 0.0;
        for _ in 0..8 {
            let sin_lat = lat.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            height = rho / lat.cos() - n;
            lat = p.z.atan2(rho * (1.0 - e2 * n / (n + height)));
        }
        Self::new(lon.to_degrees(), lat.to_degrees(), height)
    }
}

#[inline]
fn eccentricity_sq() -> f64 {
    WGS84_FLATTENING * (2.0 - WGS84_FLATTENING)
}

/// Result of asking a backend where something is on the globe.
///
/// Replaces "falsy means missing": callers pick the fallback explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeoReading {
    Resolved(Cartographic),
    Unavailable,
}

impl GeoReading {
    pub fn is_resolved(&self) -> bool {
        matches!(self, GeoReading::Resolved(_))
    }

    /// The resolved position, or `[0, 0, 0]` when nothing is known.
    pub fn or_origin(self) -> Cartographic {
        match self {
            GeoReading::Resolved(c) => c,
            GeoReading::Unavailable => Cartographic::ORIGIN,
        }
    }
}

impl From<Option<Cartographic>> for GeoReading {
    fn from(value: Option<Cartographic>) -> Self {
        value.map_or(GeoReading::Unavailable, GeoReading::Resolved)
    }
}

/// East-north-up tangent frame around an origin fix, in renderer axes.
#[derive(Clone, Debug)]
pub struct LocalFrame {
    origin: Cartographic,
    origin_ecef: DVec3,
    // rows of the ECEF -> ENU rotation
    east: DVec3,
    north: DVec3,
    up: DVec3,
}

impl LocalFrame {
    pub fn new(origin: Cartographic) -> Self {
        let (sin_lat, cos_lat) = origin.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = origin.longitude.to_radians().sin_cos();
        Self {
            origin,
            origin_ecef: origin.to_ecef(),
            east: DVec3::new(-sin_lon, cos_lon, 0.0),
            north: DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
            up: DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
        }
    }

    pub fn origin(&self) -> Cartographic {
        self.origin
    }

    /// East/north/up offset of `point` from the origin, in metres.
    pub fn enu(&self, point: &Cartographic) -> DVec3 {
        let d = point.to_ecef() - self.origin_ecef;
        DVec3::new(self.east.dot(d), self.north.dot(d), self.up.dot(d))
    }

    /// Position of `point` in renderer space (y-up, -z north).
    pub fn to_local(&self, point: &Cartographic) -> DVec3 {
        let enu = self.enu(point);
        DVec3::new(enu.x, enu.z, -enu.y)
    }

    /// Inverse of [`LocalFrame::to_local`].
    pub fn to_cartographic(&self, local: DVec3) -> Cartographic {
        let (e, n, u) = (local.x, -local.z, local.y);
        let d = self.east * e + self.north * n + self.up * u;
        Cartographic::from_ecef(self.origin_ecef + d)
    }
}
