//! Bindings to the Argon immersive context and the three.js bootstrap, and the
//! [`ArBackend`] implementation built on them.

use crate::payload::cartographic_from_entries;
use geo_core::{ArBackend, GeoAnchor, GeoReading, Marker, SceneError};
use glam::DVec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Threestrap instance created with Argon options.
    #[derive(Clone)]
    pub type Three;

    #[wasm_bindgen(js_namespace = ["THREE", "Bootstrap"], js_name = createArgonOptions)]
    fn create_argon_options(context: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = THREE, js_name = Bootstrap, catch)]
    fn bootstrap(options: &JsValue) -> Result<Three, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Three, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, getter)]
    fn argon(this: &Three) -> ThreeArgon;

    #[wasm_bindgen(method, getter)]
    fn camera(this: &Three) -> Object3D;

    /// The `three.argon` helper that links Cesium entities to Object3Ds.
    type ThreeArgon;

    #[wasm_bindgen(method, catch, js_name = objectFromEntity)]
    fn object_from_entity(this: &ThreeArgon, entity: &Entity) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = getCartographicDegreesFromEntity)]
    fn cartographic_degrees_from_entity(this: &ThreeArgon, entity: &Entity) -> JsValue;
}

#[wasm_bindgen(js_namespace = THREE)]
extern "C" {
    #[derive(Clone)]
    pub type Object3D;

    #[wasm_bindgen(method, catch)]
    fn add(this: &Object3D, child: &Object3D) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getWorldPosition)]
    fn get_world_position(this: &Object3D, target: &Vector3) -> Vector3;

    type Vector3;

    #[wasm_bindgen(constructor)]
    fn new() -> Vector3;

    #[wasm_bindgen(method, getter)]
    fn x(this: &Vector3) -> f64;
    #[wasm_bindgen(method, getter)]
    fn y(this: &Vector3) -> f64;
    #[wasm_bindgen(method, getter)]
    fn z(this: &Vector3) -> f64;

    type SphereGeometry;

    #[wasm_bindgen(constructor)]
    fn new(radius: f64, width_segments: u32, height_segments: u32) -> SphereGeometry;

    type MeshBasicMaterial;

    #[wasm_bindgen(constructor)]
    fn new(parameters: &JsValue) -> MeshBasicMaterial;

    #[wasm_bindgen(extends = Object3D)]
    #[derive(Clone)]
    pub type Mesh;

    #[wasm_bindgen(constructor, catch)]
    fn new(geometry: &SphereGeometry, material: &MeshBasicMaterial) -> Result<Mesh, JsValue>;
}

#[wasm_bindgen(js_namespace = ["Argon", "Cesium"])]
extern "C" {
    #[derive(Clone)]
    pub type Entity;

    #[wasm_bindgen(constructor)]
    fn new(options: &JsValue) -> Entity;
}

#[wasm_bindgen(js_namespace = ["Argon", "Cesium", "Cartesian3"])]
extern "C" {
    #[wasm_bindgen(js_name = fromDegrees)]
    fn cartesian3_from_degrees(longitude: f64, latitude: f64, height: f64) -> JsValue;
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Property lookup treating `undefined`/`null` as absent.
pub fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Entries of a JS array as numbers (`None` for non-numbers); `None` when the
/// value is not an array at all.
pub fn number_entries(value: &JsValue) -> Option<Vec<Option<f64>>> {
    if !js_sys::Array::is_array(value) {
        return None;
    }
    Some(js_sys::Array::from(value).iter().map(|v| v.as_f64()).collect())
}

/// `Argon.immersiveContext` from the page globals.
fn immersive_context() -> anyhow::Result<JsValue> {
    let argon =
        get(&js_sys::global(), "Argon").ok_or_else(|| anyhow::anyhow!("Argon not loaded"))?;
    get(&argon, "immersiveContext")
        .ok_or_else(|| anyhow::anyhow!("no Argon.immersiveContext"))
}

/// Scene node the Argon helper keeps aligned with a Cesium entity.
pub struct AnchorNode {
    entity: Entity,
    object: Object3D,
}

pub struct ArgonBackend {
    three: Three,
}

impl ArgonBackend {
    /// Bootstraps three.js against the immersive context.
    pub fn bootstrap() -> anyhow::Result<Self> {
        let context = immersive_context()?;
        let options = create_argon_options(&context);
        let three = bootstrap(&options).map_err(|e| anyhow::anyhow!(js_err(e)))?;
        log::info!("[argon] three.js bootstrapped");
        Ok(Self { three })
    }

    pub fn three(&self) -> &Three {
        &self.three
    }
}

fn world_position(object: &Object3D) -> DVec3 {
    let p = object.get_world_position(&Vector3::new());
    DVec3::new(p.x(), p.y(), p.z())
}

impl ArBackend for ArgonBackend {
    type Node = AnchorNode;
    type Object = Mesh;

    fn object_from_anchor(&mut self, anchor: &GeoAnchor) -> Result<AnchorNode, SceneError> {
        let p = anchor.position();
        let options = js_sys::Object::new();
        let set = |key: &str, value: &JsValue| {
            js_sys::Reflect::set(&options, &JsValue::from_str(key), value)
                .map(|_| ())
                .map_err(|e| SceneError::AnchorUnmapped(format!("{}: {}", anchor.name(), js_err(e))))
        };
        set("name", &JsValue::from_str(anchor.name()))?;
        set(
            "position",
            &cartesian3_from_degrees(p.longitude, p.latitude, p.height),
        )?;
        let entity = Entity::new(&options);

        let object = self
            .three
            .argon()
            .object_from_entity(&entity)
            .map_err(|e| SceneError::AnchorUnmapped(format!("{}: {}", anchor.name(), js_err(e))))?;
        if object.is_undefined() || object.is_null() {
            return Err(SceneError::AnchorUnmapped(anchor.name().to_string()));
        }
        Ok(AnchorNode {
            entity,
            object: object.unchecked_into(),
        })
    }

    fn create_marker(&mut self, marker: &Marker) -> Result<Mesh, SceneError> {
        let geometry =
            SphereGeometry::new(marker.radius, marker.width_segments, marker.height_segments);
        let params = js_sys::Object::new();
        js_sys::Reflect::set(
            &params,
            &JsValue::from_str("color"),
            &JsValue::from_f64(marker.color as f64),
        )
        .map_err(|e| SceneError::Marker(js_err(e)))?;
        let material = MeshBasicMaterial::new(&params);
        Mesh::new(&geometry, &material).map_err(|e| SceneError::Marker(js_err(e)))
    }

    fn attach(&mut self, parent: &AnchorNode, child: &Mesh) -> Result<(), SceneError> {
        parent
            .object
            .add(child)
            .map_err(|e| SceneError::Attach(js_err(e)))
    }

    fn cartographic_degrees(&self, _anchor: &GeoAnchor, node: &AnchorNode) -> GeoReading {
        let value = self
            .three
            .argon()
            .cartographic_degrees_from_entity(&node.entity);
        number_entries(&value)
            .and_then(|entries| cartographic_from_entries(&entries))
            .into()
    }

    fn camera_world_position(&self) -> DVec3 {
        world_position(&self.three.camera())
    }

    fn world_position(&self, object: &Mesh) -> DVec3 {
        world_position(object)
    }
}
