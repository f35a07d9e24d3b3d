//! Visitor message request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for submitting a message through the contact form.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "senderName": "Jane Doe",
    "senderEmail": "jane@example.com",
    "subject": "Freelance inquiry",
    "body": "Hi! I'd like to talk about a project."
}))]
pub struct CreateVisitorMessage {
    /// Name of the sender.
    #[validate(length(min = 1, max = 80))]
    pub sender_name: String,
    /// Contact email of the sender.
    #[validate(email)]
    pub sender_email: String,
    /// Optional message subject.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    /// Message body.
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}
