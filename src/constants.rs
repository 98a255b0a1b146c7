// DOM and event names the web front-end binds to.

// Element whose text shows the telemetry block
pub const LOCATION_ELEMENT_ID: &str = "location";

// Threestrap events
pub const REALITY_CHANGE_EVENT: &str = "argon:realityChange";
pub const UPDATE_EVENT: &str = "update";

// Query parameter selecting the anchor/sphere preset
pub const VARIANT_QUERY_KEY: &str = "variant";
