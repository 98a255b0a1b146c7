// Host-side tests for the local tangent frame used to place anchors.

use geo_core::*;
use glam::DVec3;

const MALMO: Cartographic = Cartographic {
    longitude: 11.5,
    latitude: 55.6,
    height: 0.0,
};

#[test]
fn origin_maps_to_world_origin() {
    let frame = LocalFrame::new(MALMO);
    let p = frame.to_local(&MALMO);
    assert!(p.length() < 1e-6, "{p:?}");
}

#[test]
fn north_is_negative_z_and_east_is_positive_x() {
    let frame = LocalFrame::new(MALMO);

    let north = frame.to_local(&Cartographic::from_degrees(11.5, 55.61));
    assert!(north.z < -1000.0, "{north:?}");
    assert!(north.x.abs() < 1.0, "{north:?}");

    let east = frame.to_local(&Cartographic::from_degrees(11.51, 55.6));
    assert!(east.x > 500.0, "{east:?}");
    assert!(east.z.abs() < 1.0, "{east:?}");
}

#[test]
fn height_is_positive_y() {
    let frame = LocalFrame::new(MALMO);
    let up = frame.to_local(&Cartographic::new(11.5, 55.6, 25.0));
    assert!((up.y - 25.0).abs() < 1e-6, "{up:?}");
}

#[test]
fn one_hundredth_degree_of_latitude_is_about_1113_metres() {
    let frame = LocalFrame::new(MALMO);
    let enu = frame.enu(&Cartographic::from_degrees(11.5, 55.61));
    assert!((enu.y - 1113.0).abs() < 5.0, "{enu:?}");
}

#[test]
fn local_to_cartographic_round_trip() {
    let frame = LocalFrame::new(MALMO);
    let target = Cartographic::new(11.500362, 55.613421, 12.0);
    let back = frame.to_cartographic(frame.to_local(&target));
    assert!((back.longitude - target.longitude).abs() < 1e-9);
    assert!((back.latitude - target.latitude).abs() < 1e-9);
    assert!((back.height - target.height).abs() < 1e-4);
}

#[test]
fn simulated_camera_follows_device_fix() {
    let mut sim = SimulatedReality::new();
    sim.set_device_fix(MALMO);
    assert_eq!(sim.origin(), Some(MALMO));
    assert!(sim.camera_world_position().length() < 1e-6);

    sim.set_device_fix(Cartographic::from_degrees(11.5, 55.601));
    assert_eq!(sim.origin(), Some(MALMO));
    let cam = sim.camera_world_position();
    assert!(cam.z < -100.0 && cam.z > -120.0, "{cam:?}");

    let recovered = sim.camera_cartographic().unwrap();
    assert!((recovered.latitude - 55.601).abs() < 1e-9);
}

#[test]
fn marker_tracks_anchor_node_once_origin_exists() {
    let mut sim = SimulatedReality::new();
    let anchor = GeoAnchor::new("a", Cartographic::from_degrees(11.51, 55.6));
    let node = sim.object_from_anchor(&anchor).unwrap();
    let sphere = sim.create_marker(&Marker::sphere(500.0, MARKER_COLOR)).unwrap();
    sim.attach(&node, &sphere).unwrap();

    assert_eq!(sim.world_position(&sphere), DVec3::ZERO);
    sim.set_device_fix(MALMO);
    assert_eq!(sim.world_position(&sphere), sim.node_position(node));
    assert!(sim.world_position(&sphere).x > 500.0);
    assert_eq!(sim.marker_radius(sphere), Some(500.0));
}
