//! Scroll tracking and section navigation against the live DOM.

use crate::dom::{self, Elements};
use crate::state;
use folio_scroll::{Layout, SectionBounds, Viewport, is_header_elevated};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Section geometry read from the document.
pub struct DomLayout;

impl Layout for DomLayout {
    fn scroll_y(&self) -> f64 {
        dom::window().scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let section = dom::by_id_typed::<HtmlElement>(section_id)?;
        Some(SectionBounds::new(
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
        ))
    }
}

/// Smooth-scrolls with `scrollIntoView`. The animation is not awaited.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn has_section(&self, section_id: &str) -> bool {
        dom::by_id(section_id).is_some()
    }

    fn smooth_scroll_to(&self, section_id: &str) {
        if let Some(section) = dom::by_id(section_id) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}

/// Scroll handler; also run once at load.
pub fn on_scroll(els: &Elements) {
    let layout = DomLayout;
    state::with_mut(|s| s.tracker.on_scroll(&layout));

    render_active(els, &state::active_section());
    dom::toggle_class(&els.header, "elevated", is_header_elevated(layout.scroll_y()));
}

/// Click on anything carrying `data-section`.
pub fn on_nav_click(els: &Elements, section_id: &str, from_menu: bool) {
    let viewport = DomViewport;

    if from_menu {
        let mut navigator = state::with(|s| s.navigator.clone());
        navigator.go_to_from_menu(&viewport, section_id);
        state::with_mut(|s| s.navigator = navigator);
        render_menu(els);
    } else {
        let navigator = state::with(|s| s.navigator.clone());
        navigator.go_to(&viewport, section_id);
    }
}

pub fn on_menu_toggle(els: &Elements) {
    state::with_mut(|s| s.navigator.toggle_menu());
    render_menu(els);
}

fn render_active(els: &Elements, active: &str) {
    for link in &els.nav_links {
        let is_active = link.get_attribute("data-section").as_deref() == Some(active);
        dom::toggle_class(link, "active", is_active);
    }
}

pub fn render_menu(els: &Elements) {
    let open = state::with(|s| s.navigator.is_menu_open());
    dom::toggle_class(&els.mobile_menu, "open", open);
    let _ = els
        .menu_toggle
        .set_attribute("aria-expanded", if open { "true" } else { "false" });
}
