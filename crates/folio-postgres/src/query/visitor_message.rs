//! Visitor message repository for managing contact-form submissions.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewVisitorMessage, VisitorMessage};
use crate::{PgError, PgResult, schema};

/// Repository for visitor message table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisitorMessageRepository;

impl VisitorMessageRepository {
    /// Stores a new visitor message.
    pub async fn create_message(
        conn: &mut AsyncPgConnection,
        new_message: NewVisitorMessage,
    ) -> PgResult<VisitorMessage> {
        use schema::visitor_messages;

        diesel::insert_into(visitor_messages::table)
            .values(&new_message)
            .returning(VisitorMessage::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds messages, newest first.
    pub async fn find_messages(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<Vec<VisitorMessage>> {
        use schema::visitor_messages::{self, dsl};

        visitor_messages::table
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(VisitorMessage::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Marks a message as read.
    ///
    /// Returns the updated message, or `None` if the id does not resolve.
    pub async fn mark_message_read(
        conn: &mut AsyncPgConnection,
        message_id: Uuid,
    ) -> PgResult<Option<VisitorMessage>> {
        use schema::visitor_messages::{self, dsl};

        diesel::update(visitor_messages::table.filter(dsl::id.eq(message_id)))
            .set(dsl::is_read.eq(true))
            .returning(VisitorMessage::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Deletes a message by ID. Returns whether a row was actually removed.
    pub async fn delete_message(
        conn: &mut AsyncPgConnection,
        message_id: Uuid,
    ) -> PgResult<bool> {
        use schema::visitor_messages::{self, dsl};

        let deleted = diesel::delete(visitor_messages::table.filter(dsl::id.eq(message_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Counts unread messages.
    pub async fn count_unread_messages(conn: &mut AsyncPgConnection) -> PgResult<i64> {
        use schema::visitor_messages::{self, dsl};

        visitor_messages::table
            .filter(dsl::is_read.eq(false))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }
}
