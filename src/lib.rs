#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod argon;
mod constants;
mod dom;
mod frame;
mod payload;
mod query;

use constants::{LOCATION_ELEMENT_ID, VARIANT_QUERY_KEY};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rotundan-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let sink = dom::ElementTextSink::by_id(&document, LOCATION_ELEMENT_ID)?;

    let variant = query::variant_from_query(&dom::location_search(), VARIANT_QUERY_KEY);
    log::info!("variant={}", variant);

    let backend = argon::ArgonBackend::bootstrap()?;
    let three = backend.three().clone();

    // Scene is complete before any event handler is registered
    let session = geo_core::TelemetrySession::new(&variant.config(), backend, sink)
        .context("building scene")?;
    frame::wire_session(&three, Rc::new(RefCell::new(session)));
    Ok(())
}
