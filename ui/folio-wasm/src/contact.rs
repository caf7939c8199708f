//! Contact form submission.

use crate::api;
use crate::dom::{self, Elements};
use crate::state;
use folio_api_types::ContactSubmission;
use gloo_timers::future::TimeoutFuture;

const NOTICE_TIMEOUT_MS: u32 = 5_000;
const SENT_NOTICE: &str = "Message sent! Thanks for reaching out. I'll get back to you soon.";
const FAILED_NOTICE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NoticeKind {
    Success,
    Error,
}

fn read_form(els: &Elements) -> ContactSubmission {
    ContactSubmission {
        name: els.contact_name.value(),
        email: els.contact_email.value(),
        subject: els.contact_subject.value(),
        message: els.contact_message.value(),
    }
}

pub async fn on_submit(els: &Elements) {
    if state::is_submitting() {
        return;
    }

    let submission = read_form(els);
    if let Err(err) = folio_validator::validate_submission(&submission) {
        show_notice(els, NoticeKind::Error, err.first().unwrap_or(FAILED_NOTICE));
        return;
    }

    set_submitting(els, true);
    match api::post_contact(&submission).await {
        Ok(_) => {
            show_notice(els, NoticeKind::Success, SENT_NOTICE);
            els.contact_form.reset();
        }
        Err(e) => {
            gloo_console::error!("Error sending message:", e);
            show_notice(els, NoticeKind::Error, FAILED_NOTICE);
        }
    }
    set_submitting(els, false);
}

fn set_submitting(els: &Elements, submitting: bool) {
    state::set_submitting(submitting);
    els.contact_submit.set_disabled(submitting);
}

fn show_notice(els: &Elements, kind: NoticeKind, text: &str) {
    let notice = &els.contact_notice;
    notice.set_text_content(Some(text));
    dom::toggle_class(notice, "success", kind == NoticeKind::Success);
    dom::toggle_class(notice, "error", kind == NoticeKind::Error);
    dom::remove_class(notice, "hidden");

    let generation = state::next_notice_generation();
    let notice = notice.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        if state::notice_generation() == generation {
            dom::add_class(&notice, "hidden");
            notice.set_text_content(None);
        }
    });
}
