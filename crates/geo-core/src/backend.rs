use crate::error::SceneError;
use crate::geo::GeoReading;
use crate::scene::{GeoAnchor, Marker};
use glam::DVec3;

/// The AR context provider and renderer the session is wired into.
///
/// `Node` is the scene node the provider keeps in sync with an anchor's
/// resolved transform; `Object` is a renderable hung underneath it.
pub trait ArBackend {
    type Node;
    type Object;

    fn object_from_anchor(&mut self, anchor: &GeoAnchor) -> Result<Self::Node, SceneError>;

    fn create_marker(&mut self, marker: &Marker) -> Result<Self::Object, SceneError>;

    fn attach(&mut self, parent: &Self::Node, child: &Self::Object) -> Result<(), SceneError>;

    /// Current resolved `[lon, lat, height]` of the anchor, if known.
    fn cartographic_degrees(&self, anchor: &GeoAnchor, node: &Self::Node) -> GeoReading;

    fn camera_world_position(&self) -> DVec3;

    fn world_position(&self, object: &Self::Object) -> DVec3;
}
