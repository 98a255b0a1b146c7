//! Per-frame state types shared with the front-ends.
//!
//! Nothing here touches platform APIs; the web frontend fills a [`FrameState`]
//! from the Argon update payload and the native driver synthesizes one.

use crate::geo::{Cartographic, GeoReading};

/// What the render loop hands the telemetry updater each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameState {
    pub frame_number: Option<u64>,
    /// Device position as `[lon, lat, height]`, when the provider has a fix.
    pub cartographic_degrees: Option<Cartographic>,
}

impl FrameState {
    pub fn with_fix(cartographic: Cartographic) -> Self {
        Self {
            frame_number: None,
            cartographic_degrees: Some(cartographic),
        }
    }

    pub fn eye(&self) -> GeoReading {
        self.cartographic_degrees.into()
    }
}

/// Set by the first reality-change notification and never cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readiness(bool);

impl Readiness {
    pub fn is_ready(self) -> bool {
        self.0
    }

    /// Returns `true` only on the not-ready -> ready transition.
    pub fn mark_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

/// What a single frame update did to the text sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Placeholder written; nothing was measured.
    NotReady,
    /// Status text matched the last write; sink untouched.
    Unchanged,
    /// New status text written.
    Written,
}
