//! DOM element bindings.
//!
//! All fields are resolved once at startup. Add a field here and bind it in
//! `Elements::bind()` to reach a new element.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

// ── Helpers ──

pub fn window() -> web_sys::Window {
    web_sys::window().expect("folio-wasm runs inside a browser window")
}

pub fn document() -> Document {
    window().document().expect("window has a document")
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// `data-api-base` on `<body>`, if the page points the form at another origin.
pub fn body_data(name: &str) -> Option<String> {
    let value = document().body()?.get_attribute(&format!("data-{name}"))?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

// ── Elements struct ──

/// DOM references used by navigation and the contact form.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Navigation
    pub header: Element,
    pub menu_toggle: HtmlElement,
    pub mobile_menu: Element,
    pub nav_links: Vec<Element>,
    pub section_triggers: Vec<Element>,

    // Contact form
    pub contact_form: HtmlFormElement,
    pub contact_name: HtmlInputElement,
    pub contact_email: HtmlInputElement,
    pub contact_subject: HtmlInputElement,
    pub contact_message: HtmlTextAreaElement,
    pub contact_submit: HtmlButtonElement,
    pub contact_notice: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            header: query("header").ok_or_else(|| JsValue::from_str("missing <header>"))?,
            menu_toggle: get_typed!(HtmlElement, "mobileMenuToggle"),
            mobile_menu: get_el!("mobileMenu"),
            nav_links: query_all("nav [data-section]"),
            // nav links, footer links and call-to-action buttons all carry data-section
            section_triggers: query_all("[data-section]"),

            contact_form: get_typed!(HtmlFormElement, "contactForm"),
            contact_name: get_typed!(HtmlInputElement, "contactName"),
            contact_email: get_typed!(HtmlInputElement, "contactEmail"),
            contact_subject: get_typed!(HtmlInputElement, "contactSubject"),
            contact_message: get_typed!(HtmlTextAreaElement, "contactMessage"),
            contact_submit: get_typed!(HtmlButtonElement, "contactSubmit"),
            contact_notice: get_el!("contactNotice"),
        })
    }
}
