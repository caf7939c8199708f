use serde::{Deserialize, Serialize};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message received successfully";
pub const CONTACT_FAILURE_MESSAGE: &str = "Failed to process your message. Please check your inputs.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at_epoch_ms: u128,
}

impl ContactMessage {
    pub fn from_submission(id: u64, submission: ContactSubmission, created_at_epoch_ms: u128) -> Self {
        Self {
            id,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            created_at_epoch_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl ContactResponse {
    pub fn accepted(id: u64) -> Self {
        Self {
            success: true,
            message: CONTACT_SUCCESS_MESSAGE.to_owned(),
            id: Some(id),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: CONTACT_FAILURE_MESSAGE.to_owned(),
            id: None,
        }
    }
}
