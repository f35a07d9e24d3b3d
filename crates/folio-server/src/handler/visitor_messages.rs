//! Visitor message handlers for the contact form and admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use folio_postgres::PgClient;
use folio_postgres::model::NewVisitorMessage;
use folio_postgres::query::VisitorMessageRepository;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::extract::{AdminAuth, Json, ValidateJson};
use crate::handler::request::{CreateVisitorMessage, PaginationParams};
use crate::handler::response::{ErrorResponse, VisitorMessage, VisitorMessages};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for visitor message operations.
const TRACING_TARGET: &str = "folio_server::handler::visitor_messages";

/// Path params for a message ID.
#[must_use]
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MessagePathParams {
    /// Unique identifier of the message.
    pub message_id: Uuid,
}

/// Submits a message through the public contact form.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    post, path = "/messages", tag = "messages",
    request_body(
        content = CreateVisitorMessage,
        description = "New visitor message",
        content_type = "application/json",
    ),
    responses(
        (
            status = BAD_REQUEST,
            description = "Validation failure",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = CREATED,
            description = "Message submitted",
            body = VisitorMessage,
        ),
    ),
)]
async fn create_message(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateVisitorMessage>,
) -> Result<(StatusCode, Json<VisitorMessage>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_message = NewVisitorMessage {
        sender_name: request.sender_name,
        sender_email: request.sender_email,
        subject: request.subject.unwrap_or_default(),
        body: request.body,
    };

    let message = VisitorMessageRepository::create_message(&mut conn, new_message).await?;

    tracing::info!(
        target: TRACING_TARGET,
        message_id = message.id.to_string(),
        "Visitor message received",
    );

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Lists visitor messages, newest first. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/messages", tag = "messages",
    params(PaginationParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Message inbox",
            body = VisitorMessages,
        ),
    ),
)]
async fn list_messages(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Query(pagination): Query<PaginationParams>,
) -> Result<(StatusCode, Json<VisitorMessages>)> {
    let mut conn = pg_client.get_connection().await?;

    let messages = VisitorMessageRepository::find_messages(&mut conn, pagination.into()).await?;

    Ok((
        StatusCode::OK,
        Json(messages.into_iter().map(Into::into).collect()),
    ))
}

/// Marks a message as read. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    post, path = "/messages/{messageId}/read", tag = "messages",
    params(MessagePathParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Message not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Message marked as read",
            body = VisitorMessage,
        ),
    ),
)]
async fn mark_message_read(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<MessagePathParams>,
) -> Result<(StatusCode, Json<VisitorMessage>)> {
    let mut conn = pg_client.get_connection().await?;

    let Some(message) =
        VisitorMessageRepository::mark_message_read(&mut conn, path_params.message_id).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Message not found: {}", path_params.message_id))
            .with_resource("visitor_message"));
    };

    Ok((StatusCode::OK, Json(message.into())))
}

/// Deletes a message. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    delete, path = "/messages/{messageId}", tag = "messages",
    params(MessagePathParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Message not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = NO_CONTENT,
            description = "Message deleted",
        ),
    ),
)]
async fn delete_message(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<MessagePathParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted =
        VisitorMessageRepository::delete_message(&mut conn, path_params.message_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_message(format!("Message not found: {}", path_params.message_id))
            .with_resource("visitor_message"));
    }

    tracing::info!(
        target: TRACING_TARGET,
        message_id = path_params.message_id.to_string(),
        "Visitor message deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all visitor message routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(create_message, list_messages))
        .routes(routes!(mark_message_read))
        .routes(routes!(delete_message))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::response::{VisitorMessage, VisitorMessages};
    use crate::handler::test::{admin_bearer, create_test_server};

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn contact_form_round_trip() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server
            .post("/messages")
            .json(&json!({
                "senderName": "Jane Doe",
                "senderEmail": "jane@example.com",
                "body": "Hello!"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let message = response.json::<VisitorMessage>();
        assert!(!message.is_read);

        // Inbox is admin-gated.
        let response = server.get("/messages").await;
        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

        let response = server
            .get("/messages")
            .add_header("authorization", admin_bearer())
            .await;
        response.assert_status_ok();
        let inbox = response.json::<VisitorMessages>();
        assert!(inbox.iter().any(|m| m.message_id == message.message_id));

        let response = server
            .post(&format!("/messages/{}/read", message.message_id))
            .add_header("authorization", admin_bearer())
            .await;
        response.assert_status_ok();
        let message = response.json::<VisitorMessage>();
        assert!(message.is_read);

        Ok(())
    }
}
