//! Active-section state machine.
//!
//! Holds one variable, the active section id. Each tick computes a reference
//! offset (`scroll_y + lookahead`) and picks the section whose vertical range
//! contains it. Runs for the lifetime of the page; there is no terminal state.

/// Offset added to the scroll position so a section activates slightly early.
pub const DEFAULT_LOOKAHEAD: f64 = 300.0;

/// Scroll position past which the header is drawn elevated.
pub const HEADER_ELEVATION_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open range check: `[top, top + height)`.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Read-only view of page geometry.
pub trait Layout {
    fn scroll_y(&self) -> f64;

    /// `None` when the section cannot be measured (e.g. it is not in the document).
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
}

/// Pick the section containing `reference`.
///
/// Sections are examined in order and every match overwrites the previous one,
/// so with overlapping ranges the last match wins. Unmeasurable sections are
/// skipped.
pub fn resolve_active<'a, I>(reference: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<SectionBounds>)>,
{
    let mut active = None;
    for (id, bounds) in sections {
        let Some(bounds) = bounds else {
            continue;
        };
        if bounds.contains(reference) {
            active = Some(id);
        }
    }
    active
}

pub fn is_header_elevated(scroll_y: f64) -> bool {
    scroll_y > HEADER_ELEVATION_THRESHOLD
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    sections: Vec<String>,
    lookahead: f64,
    active: String,
}

impl ScrollTracker {
    /// Start tracking `sections` (document order). The first section is active
    /// until the first tick says otherwise.
    pub fn new<I, S>(sections: I, lookahead: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active = sections.first().cloned().unwrap_or_default();
        Self {
            sections,
            lookahead,
            active,
        }
    }

    pub fn with_default_sections() -> Self {
        Self::new(crate::SECTION_IDS, DEFAULT_LOOKAHEAD)
    }

    pub fn active_section_id(&self) -> &str {
        &self.active
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Recompute the active section. Returns `true` when it changed.
    ///
    /// When no section contains the reference offset the previous value is kept.
    pub fn on_scroll<L: Layout + ?Sized>(&mut self, layout: &L) -> bool {
        let reference = layout.scroll_y() + self.lookahead;
        let next = resolve_active(
            reference,
            self.sections
                .iter()
                .map(|id| (id.as_str(), layout.section_bounds(id))),
        )
        .map(ToOwned::to_owned);

        match next {
            Some(id) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::with_default_sections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeLayout {
        scroll_y: f64,
        sections: HashMap<&'static str, SectionBounds>,
    }

    impl FakeLayout {
        fn stacked(scroll_y: f64) -> Self {
            let sections = HashMap::from([
                ("home", SectionBounds::new(0.0, 800.0)),
                ("about", SectionBounds::new(800.0, 800.0)),
                ("resume", SectionBounds::new(1600.0, 800.0)),
            ]);
            Self { scroll_y, sections }
        }
    }

    impl Layout for FakeLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
            self.sections.get(section_id).copied()
        }
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(["home", "about", "resume"], DEFAULT_LOOKAHEAD)
    }

    #[test]
    fn reference_offset_inside_about_activates_about() {
        let mut tracker = tracker();
        assert_eq!(tracker.active_section_id(), "home");

        let changed = tracker.on_scroll(&FakeLayout::stacked(1000.0));

        assert!(changed);
        assert_eq!(tracker.active_section_id(), "about");
    }

    #[test]
    fn range_is_half_open() {
        let mut tracker = tracker();

        // reference 800 is the first unit of about, not the last of home
        tracker.on_scroll(&FakeLayout::stacked(500.0));
        assert_eq!(tracker.active_section_id(), "about");

        tracker.on_scroll(&FakeLayout::stacked(499.0));
        assert_eq!(tracker.active_section_id(), "home");
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = tracker();
        tracker.on_scroll(&FakeLayout::stacked(1400.0));
        assert_eq!(tracker.active_section_id(), "resume");

        // reference 2700 lies past the last section
        let changed = tracker.on_scroll(&FakeLayout::stacked(2400.0));
        assert!(!changed);
        assert_eq!(tracker.active_section_id(), "resume");
    }

    #[test]
    fn unchanged_section_reports_no_change() {
        let mut tracker = tracker();
        assert!(tracker.on_scroll(&FakeLayout::stacked(600.0)));
        assert!(!tracker.on_scroll(&FakeLayout::stacked(700.0)));
    }

    #[test]
    fn unmeasurable_section_is_skipped() {
        let mut layout = FakeLayout::stacked(1000.0);
        layout.sections.remove("about");

        let mut tracker = tracker();
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active_section_id(), "home");
    }

    #[test]
    fn overlapping_ranges_last_match_wins() {
        let sections = [
            ("home", Some(SectionBounds::new(0.0, 1000.0))),
            ("about", Some(SectionBounds::new(500.0, 1000.0))),
            ("resume", None),
        ];
        assert_eq!(resolve_active(700.0, sections), Some("about"));
        assert_eq!(resolve_active(200.0, sections), Some("home"));
        assert_eq!(resolve_active(5000.0, sections), None);
    }

    #[test]
    fn default_tracker_covers_every_page_section() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.sections(), crate::SECTION_IDS);
        assert_eq!(tracker.active_section_id(), "home");
        assert_eq!(tracker.lookahead(), DEFAULT_LOOKAHEAD);
    }

    #[test]
    fn header_elevates_past_threshold() {
        assert!(!is_header_elevated(0.0));
        assert!(!is_header_elevated(10.0));
        assert!(is_header_elevated(10.5));
    }
}
