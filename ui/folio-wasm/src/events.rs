//! Event binding.
//!
//! Wires the scroll listener, section links, the mobile menu toggle and the
//! contact form. Async handlers are spawned via `wasm_bindgen_futures::spawn_local`.

use crate::contact;
use crate::dom::{self, Elements};
use crate::nav;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Bind all page event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Scroll ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            nav::on_scroll(&els2);
        }) as Box<dyn FnMut(_)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        dom::window().add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
        cb.forget();
    }

    // ── Section links and call-to-action buttons ──
    for trigger in &els.section_triggers {
        let section_id = trigger.get_attribute("data-section").unwrap_or_default();
        let trigger_node: &web_sys::Node = trigger;
        let from_menu = els.mobile_menu.contains(Some(trigger_node));
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            nav::on_nav_click(&els2, &section_id, from_menu);
        }) as Box<dyn FnMut(_)>);
        trigger.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Mobile menu ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            nav::on_menu_toggle(&els2);
        }) as Box<dyn FnMut(_)>);
        els.menu_toggle
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Contact form ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                contact::on_submit(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.contact_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
