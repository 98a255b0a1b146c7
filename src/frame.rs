use crate::argon::{get, number_entries, ArgonBackend, Three};
use crate::constants::{REALITY_CHANGE_EVENT, UPDATE_EVENT};
use crate::dom::ElementTextSink;
use crate::payload::RawArgonState;
use geo_core::{FrameOutcome, FrameState, TelemetrySession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub type Session = TelemetrySession<ArgonBackend, ElementTextSink>;

/// Pulls the bits of `event.argonState` the telemetry needs. Anything missing
/// or malformed reads as absent.
pub fn read_frame_state(event: &JsValue) -> FrameState {
    let state = get(event, "argonState");
    let raw = RawArgonState {
        frame_number: state
            .as_ref()
            .and_then(|s| get(s, "frameNumber"))
            .and_then(|n| n.as_f64()),
        cartographic_degrees: state
            .as_ref()
            .and_then(|s| get(s, "position"))
            .and_then(|p| get(&p, "cartographicDegrees"))
            .and_then(|c| number_entries(&c)),
    };
    raw.into_frame_state()
}

/// Registers the reality-change and per-frame handlers on the threestrap
/// instance. Both share the one session.
pub fn wire_session(three: &Three, session: Rc<RefCell<Session>>) {
    let session_reality = session.clone();
    let reality_closure = Closure::wrap(Box::new(move |_event: JsValue| {
        session_reality.borrow_mut().on_reality_change();
    }) as Box<dyn FnMut(JsValue)>);
    three.on(REALITY_CHANGE_EVENT, reality_closure.as_ref().unchecked_ref());
    reality_closure.forget();

    let update_closure = Closure::wrap(Box::new(move |event: JsValue| {
        let state = read_frame_state(&event);
        if session.borrow_mut().on_frame(&state) == FrameOutcome::Written {
            log::trace!("[frame] {:?} status written", state.frame_number);
        }
    }) as Box<dyn FnMut(JsValue)>);
    three.on(UPDATE_EVENT, update_closure.as_ref().unchecked_ref());
    update_closure.forget();
}
