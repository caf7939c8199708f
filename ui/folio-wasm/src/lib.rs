//! Folio portfolio page, browser side.
//!
//! Tracks the active section while the page scrolls, drives smooth-scroll
//! navigation and the mobile menu, and submits the contact form.

pub mod api;
pub mod contact;
pub mod dom;
pub mod events;
pub mod nav;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Pick the initial section before the first scroll event arrives
    nav::on_scroll(&els);
    nav::render_menu(&els);

    events::bind_events(&els)?;

    Ok(())
}
