//! Host-side stand-in for the AR context provider and renderer.
//!
//! The first device fix becomes the reality origin. Anchor nodes sit at their
//! local-frame offset from that origin and the camera follows the device.

use crate::backend::ArBackend;
use crate::error::SceneError;
use crate::geo::{Cartographic, GeoReading, LocalFrame};
use crate::scene::{GeoAnchor, Marker};
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectId(usize);

#[derive(Clone, Debug)]
struct SimObject {
    radius: f64,
    parent: Option<NodeId>,
}

#[derive(Clone, Debug, Default)]
pub struct SimulatedReality {
    frame: Option<LocalFrame>,
    anchors: Vec<Cartographic>,
    objects: Vec<SimObject>,
    camera: DVec3,
}

impl SimulatedReality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a known origin, as if reality had already been assigned.
    pub fn with_origin(origin: Cartographic) -> Self {
        Self {
            frame: Some(LocalFrame::new(origin)),
            ..Self::default()
        }
    }

    pub fn origin(&self) -> Option<Cartographic> {
        self.frame.as_ref().map(LocalFrame::origin)
    }

    pub fn local_frame(&self) -> Option<&LocalFrame> {
        self.frame.as_ref()
    }

    /// Moves the camera to the device fix. The first fix fixes the origin.
    pub fn set_device_fix(&mut self, fix: Cartographic) {
        let frame = self.frame.get_or_insert_with(|| {
            log::info!(
                "[sim] reality origin at ({}, {}, {})",
                fix.longitude,
                fix.latitude,
                fix.height
            );
            LocalFrame::new(fix)
        });
        self.camera = frame.to_local(&fix);
    }

    /// Places the camera directly in world space.
    pub fn set_camera_position(&mut self, position: DVec3) {
        self.camera = position;
    }

    /// Device position implied by the camera, once an origin exists.
    pub fn camera_cartographic(&self) -> Option<Cartographic> {
        self.frame.as_ref().map(|f| f.to_cartographic(self.camera))
    }

    pub fn node_position(&self, node: NodeId) -> DVec3 {
        match (&self.frame, self.anchors.get(node.0)) {
            (Some(frame), Some(anchor)) => frame.to_local(anchor),
            _ => DVec3::ZERO,
        }
    }

    pub fn marker_radius(&self, object: ObjectId) -> Option<f64> {
        self.objects.get(object.0).map(|o| o.radius)
    }
}

impl ArBackend for SimulatedReality {
    type Node = NodeId;
    type Object = ObjectId;

    fn object_from_anchor(&mut self, anchor: &GeoAnchor) -> Result<NodeId, SceneError> {
        let position = anchor.position();
        if !position.is_finite() {
            return Err(SceneError::AnchorUnmapped(anchor.name().to_string()));
        }
        self.anchors.push(position);
        Ok(NodeId(self.anchors.len() - 1))
    }

    fn create_marker(&mut self, marker: &Marker) -> Result<ObjectId, SceneError> {
        if marker.radius.is_nan() || marker.radius <= 0.0 {
            return Err(SceneError::Marker(format!("radius {}", marker.radius)));
        }
        self.objects.push(SimObject {
            radius: marker.radius,
            parent: None,
        });
        Ok(ObjectId(self.objects.len() - 1))
    }

    fn attach(&mut self, parent: &NodeId, child: &ObjectId) -> Result<(), SceneError> {
        if parent.0 >= self.anchors.len() {
            return Err(SceneError::Attach(format!("no node {}", parent.0)));
        }
        let obj = self
            .objects
            .get_mut(child.0)
            .ok_or_else(|| SceneError::Attach(format!("no object {}", child.0)))?;
        obj.parent = Some(*parent);
        Ok(())
    }

    fn cartographic_degrees(&self, _anchor: &GeoAnchor, node: &NodeId) -> GeoReading {
        match (&self.frame, self.anchors.get(node.0)) {
            (Some(_), Some(position)) => GeoReading::Resolved(*position),
            _ => GeoReading::Unavailable,
        }
    }

    fn camera_world_position(&self) -> DVec3 {
        self.camera
    }

    fn world_position(&self, object: &ObjectId) -> DVec3 {
        self.objects
            .get(object.0)
            .and_then(|o| o.parent)
            .map(|node| self.node_position(node))
            .unwrap_or(DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_unavailable_until_origin_known() {
        let mut sim = SimulatedReality::new();
        let anchor = GeoAnchor::new("a", Cartographic::from_degrees(11.5, 55.6));
        let node = sim.object_from_anchor(&anchor).unwrap();
        assert_eq!(
            sim.cartographic_degrees(&anchor, &node),
            GeoReading::Unavailable
        );
        sim.set_device_fix(Cartographic::from_degrees(11.5, 55.6));
        assert_eq!(
            sim.cartographic_degrees(&anchor, &node),
            GeoReading::Resolved(anchor.position())
        );
    }

    #[test]
    fn unattached_marker_stays_at_world_origin() {
        let mut sim = SimulatedReality::with_origin(Cartographic::from_degrees(11.0, 55.0));
        let anchor = GeoAnchor::new("a", Cartographic::from_degrees(11.01, 55.0));
        let _node = sim.object_from_anchor(&anchor).unwrap();
        let sphere = sim.create_marker(&Marker::sphere(10.0, 0)).unwrap();
        assert_eq!(sim.world_position(&sphere), DVec3::ZERO);
    }

    #[test]
    fn attach_rejects_unknown_handles() {
        let mut sim = SimulatedReality::new();
        let sphere = sim.create_marker(&Marker::default()).unwrap();
        assert!(matches!(
            sim.attach(&NodeId(3), &sphere),
            Err(SceneError::Attach(_))
        ));
    }
}
