//! The telemetry session: one-time scene setup plus the two callbacks the
//! render loop drives (reality change and per-frame update).

use crate::backend::ArBackend;
use crate::config::SessionConfig;
use crate::constants::NOT_READY_TEXT;
use crate::error::SessionError;
use crate::scene::{GeoAnchor, Marker};
use crate::sink::TextSink;
use crate::state::{FrameOutcome, FrameState, Readiness};
use crate::telemetry::Telemetry;

pub struct TelemetrySession<B: ArBackend, S: TextSink> {
    backend: B,
    sink: S,
    title: String,
    anchor: GeoAnchor,
    marker: Marker,
    target: B::Node,
    sphere: B::Object,
    readiness: Readiness,
    last_text: String,
    last_telemetry: Option<Telemetry>,
}

impl<B: ArBackend, S: TextSink> TelemetrySession<B, S> {
    /// Builds the marker and anchor and hangs the marker under the anchor's
    /// scene node. Must run before any callback is delivered.
    pub fn new(config: &SessionConfig, mut backend: B, sink: S) -> Result<Self, SessionError> {
        config.validate()?;
        let anchor = config.anchor();
        let marker = config.marker();

        let sphere = backend.create_marker(&marker)?;
        let target = backend.object_from_anchor(&anchor)?;
        backend.attach(&target, &sphere)?;

        let p = anchor.position();
        log::info!(
            "[session] anchor '{}' at ({}, {}, {}) radius={}",
            anchor.name(),
            p.longitude,
            p.latitude,
            p.height,
            marker.radius
        );

        Ok(Self {
            backend,
            sink,
            title: config.title.clone(),
            anchor,
            marker,
            target,
            sphere,
            readiness: Readiness::default(),
            last_text: String::new(),
            last_telemetry: None,
        })
    }

    /// Called whenever the provider assigns or switches reality. Only the
    /// first call has an effect; returns whether this call made it ready.
    pub fn on_reality_change(&mut self) -> bool {
        let first = self.readiness.mark_ready();
        if first {
            log::info!("[session] reality assigned");
        } else {
            log::debug!("[session] reality changed again; already ready");
        }
        first
    }

    pub fn on_frame(&mut self, frame: &FrameState) -> FrameOutcome {
        if !self.readiness.is_ready() {
            self.sink.write(NOT_READY_TEXT);
            return FrameOutcome::NotReady;
        }

        let eye = frame.eye();
        let target = self.backend.cartographic_degrees(&self.anchor, &self.target);
        if !eye.is_resolved() {
            log::trace!("[frame] no device fix, using [0, 0, 0]");
        }
        if !target.is_resolved() {
            log::trace!("[frame] anchor unresolved, using [0, 0, 0]");
        }

        let camera = self.backend.camera_world_position();
        let marker = self.backend.world_position(&self.sphere);
        let telemetry = Telemetry::measure(camera, marker, eye, target);
        let text = telemetry.render(&self.title);
        self.last_telemetry = Some(telemetry);

        if text == self.last_text {
            return FrameOutcome::Unchanged;
        }
        log::debug!("[frame] status changed ({:?})", frame.frame_number);
        self.sink.write(&text);
        self.last_text = text;
        FrameOutcome::Written
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    pub fn anchor(&self) -> &GeoAnchor {
        &self.anchor
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Text of the last status write; empty until the first ready frame.
    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    pub fn last_telemetry(&self) -> Option<&Telemetry> {
        self.last_telemetry.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Front-ends feed new pose data through here between frames.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
