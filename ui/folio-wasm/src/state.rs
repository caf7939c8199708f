//! Page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Borrows never span a DOM call that could re-enter an event handler.

use folio_scroll::{ScrollTracker, SectionNavigator};
use std::cell::RefCell;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub tracker: ScrollTracker,
    pub navigator: SectionNavigator,
    pub submitting: bool,
    /// Bumped on every notice so a stale auto-clear timer leaves newer notices alone.
    pub notice_generation: u64,
}

thread_local! {
    static STATE: RefCell<UiState> = RefCell::new(UiState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&UiState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut UiState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn active_section() -> String {
    with(|s| s.tracker.active_section_id().to_owned())
}

pub fn is_submitting() -> bool {
    with(|s| s.submitting)
}

pub fn set_submitting(submitting: bool) {
    with_mut(|s| s.submitting = submitting);
}

pub fn next_notice_generation() -> u64 {
    with_mut(|s| {
        s.notice_generation += 1;
        s.notice_generation
    })
}

pub fn notice_generation() -> u64 {
    with(|s| s.notice_generation)
}
