//! Plain-data view of the `argonState` attached to each update event.
//!
//! The JS side only extracts raw numbers; the rules for what counts as a usable
//! frame number or fix live here so they can be exercised off the browser.

use geo_core::{Cartographic, FrameState};

/// Raw fields pulled from `event.argonState`. `None` means the property was
/// missing or not of the expected kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawArgonState {
    pub frame_number: Option<f64>,
    /// Entries of `position.cartographicDegrees`, `None` per non-number entry.
    pub cartographic_degrees: Option<Vec<Option<f64>>>,
}

impl RawArgonState {
    pub fn into_frame_state(self) -> FrameState {
        FrameState {
            frame_number: frame_number_from(self.frame_number),
            cartographic_degrees: self
                .cartographic_degrees
                .as_deref()
                .and_then(cartographic_from_entries),
        }
    }
}

/// Frame counters are non-negative integers; anything else reads as absent.
pub fn frame_number_from(raw: Option<f64>) -> Option<u64> {
    raw.filter(|n| n.is_finite() && *n >= 0.0).map(|n| n as u64)
}

/// `[lon, lat]` or `[lon, lat, height]`, every entry a number.
pub fn cartographic_from_entries(entries: &[Option<f64>]) -> Option<Cartographic> {
    let values = entries.iter().copied().collect::<Option<Vec<f64>>>()?;
    Cartographic::from_slice(&values)
}
