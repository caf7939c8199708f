//! Scroll tracking and section navigation for the single-page layout.
//!
//! Both state machines are platform-independent: the browser crate supplies
//! geometry through [`Layout`] and performs scrolling through [`Viewport`].

pub mod navigator;
pub mod tracker;

pub use navigator::{SectionNavigator, Viewport};
pub use tracker::{DEFAULT_LOOKAHEAD, Layout, ScrollTracker, SectionBounds, is_header_elevated, resolve_active};

/// Page sections in document order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "resume", "projects", "contact"];
