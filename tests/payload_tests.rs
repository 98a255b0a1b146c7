// Host-side tests for reading the per-frame `argonState` payload.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/payload.rs"]
mod payload;

use geo_core::Cartographic;
use payload::*;

#[test]
fn missing_argon_state_reads_as_nothing() {
    let state = RawArgonState::default().into_frame_state();
    assert_eq!(state.frame_number, None);
    assert_eq!(state.cartographic_degrees, None);
}

#[test]
fn two_entry_fix_gets_zero_height() {
    let raw = RawArgonState {
        frame_number: Some(7.0),
        cartographic_degrees: Some(vec![Some(11.5), Some(55.6)]),
    };
    let state = raw.into_frame_state();
    assert_eq!(state.frame_number, Some(7));
    assert_eq!(state.cartographic_degrees, Some(Cartographic::new(11.5, 55.6, 0.0)));
}

#[test]
fn three_entry_fix_keeps_height() {
    assert_eq!(
        cartographic_from_entries(&[Some(11.5), Some(55.6), Some(10.0)]),
        Some(Cartographic::new(11.5, 55.6, 10.0))
    );
}

#[test]
fn non_number_entry_or_wrong_length_drops_the_fix() {
    assert_eq!(cartographic_from_entries(&[Some(11.5), None, Some(10.0)]), None);
    assert_eq!(cartographic_from_entries(&[Some(11.5)]), None);
    assert_eq!(cartographic_from_entries(&[]), None);
    assert_eq!(
        cartographic_from_entries(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
        None
    );
}

#[test]
fn non_array_degrees_leave_frame_number_intact() {
    // `number_entries` yields None for a non-array `cartographicDegrees`
    let raw = RawArgonState {
        frame_number: Some(3.0),
        cartographic_degrees: None,
    };
    let state = raw.into_frame_state();
    assert_eq!(state.frame_number, Some(3));
    assert_eq!(state.cartographic_degrees, None);
}

#[test]
fn frame_number_must_be_finite_and_non_negative() {
    assert_eq!(frame_number_from(Some(0.0)), Some(0));
    assert_eq!(frame_number_from(Some(42.0)), Some(42));
    assert_eq!(frame_number_from(Some(-1.0)), None);
    assert_eq!(frame_number_from(Some(f64::NAN)), None);
    assert_eq!(frame_number_from(Some(f64::INFINITY)), None);
    assert_eq!(frame_number_from(None), None);
}
