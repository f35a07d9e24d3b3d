//! Visitor message response types.

use folio_postgres::model;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Represents a message submitted through the contact form.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorMessage {
    /// ID of the message.
    pub message_id: Uuid,
    /// Name of the sender.
    pub sender_name: String,
    /// Contact email of the sender.
    pub sender_email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Whether the admin has read the message.
    pub is_read: bool,
    /// Timestamp when the message was submitted.
    pub created_at: OffsetDateTime,
}

impl From<model::VisitorMessage> for VisitorMessage {
    fn from(message: model::VisitorMessage) -> Self {
        Self {
            message_id: message.id,
            sender_name: message.sender_name,
            sender_email: message.sender_email,
            subject: message.subject,
            body: message.body,
            is_read: message.is_read,
            created_at: message.created_at,
        }
    }
}

/// Response for listing visitor messages.
pub type VisitorMessages = Vec<VisitorMessage>;
