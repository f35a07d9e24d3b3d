//! Visitor message model for PostgreSQL database operations.

use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::visitor_messages;

/// Visitor message model representing a contact-form submission.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = visitor_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VisitorMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sender display name.
    pub sender_name: String,
    /// Sender contact email.
    pub sender_email: String,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Whether an admin has read the message.
    pub is_read: bool,
    /// Timestamp when the message was submitted.
    pub created_at: OffsetDateTime,
}

/// Data for creating a new visitor message.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = visitor_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVisitorMessage {
    /// Sender display name.
    pub sender_name: String,
    /// Sender contact email.
    pub sender_email: String,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}
