//! Programmatic navigation between sections, plus the mobile menu overlay.

/// Something that can smooth-scroll a section into view.
pub trait Viewport {
    fn has_section(&self, section_id: &str) -> bool;

    /// Start a smooth scroll aligning the section's top with the viewport.
    /// The animation is fire-and-forget.
    fn smooth_scroll_to(&self, section_id: &str);
}

#[derive(Clone, Debug, Default)]
pub struct SectionNavigator {
    menu_open: bool,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll to `section_id`. An unknown id is a silent no-op.
    pub fn go_to<V: Viewport + ?Sized>(&self, viewport: &V, section_id: &str) -> bool {
        if !viewport.has_section(section_id) {
            return false;
        }
        viewport.smooth_scroll_to(section_id);
        true
    }

    /// Navigation from a menu link: scroll, then close the mobile menu even if
    /// the section was missing.
    pub fn go_to_from_menu<V: Viewport + ?Sized>(&mut self, viewport: &V, section_id: &str) -> bool {
        let scrolled = self.go_to(viewport, section_id);
        self.close_menu();
        scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingViewport {
        known: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingViewport {
        fn new() -> Self {
            Self {
                known: crate::SECTION_IDS.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn has_section(&self, section_id: &str) -> bool {
            self.known.contains(&section_id)
        }

        // Records every scroll request, known section or not.
        fn smooth_scroll_to(&self, section_id: &str) {
            self.scrolled.borrow_mut().push(section_id.to_owned());
        }
    }

    #[test]
    fn go_to_known_section_scrolls() {
        let viewport = RecordingViewport::new();
        let navigator = SectionNavigator::new();

        assert!(navigator.go_to(&viewport, "projects"));
        assert_eq!(*viewport.scrolled.borrow(), ["projects"]);
    }

    #[test]
    fn go_to_unknown_section_is_silent_noop() {
        let viewport = RecordingViewport::new();
        let navigator = SectionNavigator::new();

        assert!(!navigator.go_to(&viewport, "nonexistent-id"));
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn menu_navigation_closes_menu() {
        let viewport = RecordingViewport::new();
        let mut navigator = SectionNavigator::new();

        assert!(navigator.toggle_menu());
        assert!(navigator.go_to_from_menu(&viewport, "about"));
        assert!(!navigator.is_menu_open());
    }

    #[test]
    fn menu_closes_even_when_section_missing() {
        let viewport = RecordingViewport::new();
        let mut navigator = SectionNavigator::new();
        navigator.toggle_menu();

        assert!(!navigator.go_to_from_menu(&viewport, "nonexistent-id"));
        assert!(!navigator.is_menu_open());
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn plain_go_to_leaves_menu_alone() {
        let viewport = RecordingViewport::new();
        let mut navigator = SectionNavigator::new();
        navigator.toggle_menu();

        navigator.go_to(&viewport, "contact");
        assert!(navigator.is_menu_open());

        assert!(!navigator.toggle_menu());
    }
}
