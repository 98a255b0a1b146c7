// Shared scene/telemetry constants used by both web and native front-ends.

// Marker appearance
pub const MARKER_COLOR: u32 = 0x55acee; // twitter blue
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

// Default anchor: the large variant
pub const DEFAULT_ANCHOR_NAME: &str = "Turning Torso";
pub const DEFAULT_LONGITUDE: f64 = 11.500362;
pub const DEFAULT_LATITUDE: f64 = 55.613421;
pub const DEFAULT_RADIUS: f64 = 1000.0;

// Small variant differs only in radius and an eastward longitude shift
pub const SMALL_RADIUS: f64 = 500.0;
pub const SMALL_LONGITUDE_SHIFT_DEG: f64 = 0.01;

// Status text
pub const NOT_READY_TEXT: &str = "No reality yet";
pub const DEFAULT_TITLE: &str = "Operation Rotundan";

// WGS84 ellipsoid
pub const WGS84_SEMI_MAJOR_M: f64 = 6_378_137.0;
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;
