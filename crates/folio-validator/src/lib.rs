use folio_api_types::ContactSubmission;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

// The browser form library's email grammar. Its two lookaheads (no leading
// dot, no `..`) are checked separately since `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// One or more rule violations found in a contact payload.
///
/// The submission is rejected as a whole; `messages` holds one entry per
/// violated rule in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && EMAIL_PATTERN.is_match(candidate)
}

/// Length in UTF-16 code units, the unit browser-side minimums are measured in.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate an untyped contact payload.
pub fn validate(raw: &Value) -> Result<ContactSubmission, ValidationError> {
    let Some(fields) = raw.as_object() else {
        return Err(ValidationError {
            messages: vec!["payload must be a JSON object".to_owned()],
        });
    };

    let mut messages = Vec::new();

    let name = string_field(fields, "name", &mut messages);
    if let Some(name) = name {
        if text_len(name) < NAME_MIN_CHARS {
            messages.push("Name must be at least 2 characters".to_owned());
        }
    }

    let email = string_field(fields, "email", &mut messages);
    if let Some(email) = email {
        if !is_valid_email(email) {
            messages.push("Please enter a valid email address".to_owned());
        }
    }

    let subject = string_field(fields, "subject", &mut messages);
    if let Some(subject) = subject {
        if text_len(subject) < SUBJECT_MIN_CHARS {
            messages.push("Subject must be at least 3 characters".to_owned());
        }
    }

    let message = string_field(fields, "message", &mut messages);
    if let Some(message) = message {
        if text_len(message) < MESSAGE_MIN_CHARS {
            messages.push("Message must be at least 10 characters".to_owned());
        }
    }

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if messages.is_empty() => {
            Ok(ContactSubmission {
                name: name.to_owned(),
                email: email.to_owned(),
                subject: subject.to_owned(),
                message: message.to_owned(),
            })
        }
        _ => Err(ValidationError { messages }),
    }
}

/// Validate an already-typed submission, as the browser form does before posting.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ValidationError> {
    let raw = serde_json::json!({
        "name": submission.name,
        "email": submission.email,
        "subject": submission.subject,
        "message": submission.message,
    });
    validate(&raw).map(|_| ())
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str, messages: &mut Vec<String>) -> Option<&'a str> {
    match fields.get(key) {
        None | Some(Value::Null) => {
            messages.push(format!("{key} is required"));
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(_) => {
            messages.push(format!("{key} must be a string"));
            None
        }
    }
}
