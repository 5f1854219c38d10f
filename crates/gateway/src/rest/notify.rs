//! Notification REST endpoint

use axum::{
    extract::{Path, State},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::GatewayResult;
use crate::rest::role::ErrorResponse;
use crate::state::GatewayState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotifyBody {
    /// Role name followed by the message text, e.g. "team Meeting at 18:00"
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    /// Message body to broadcast
    pub body: String,
    /// Mention handles of every visible member
    pub mentions: Vec<String>,
}

/// Create notification routes
pub fn create_notify_routes() -> Router<Arc<GatewayState>> {
    Router::new().route("/chats/:chat_id/notify", axum::routing::post(notify))
}

#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/notify",
    tag = "Notify",
    params(("chat_id" = i64, Path, description = "Chat ID")),
    request_body = NotifyBody,
    responses(
        (status = 200, description = "Prepared notification", body = NotificationResponse),
        (status = 400, description = "Missing role token or message body", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 422, description = "Role has nobody to notify", body = ErrorResponse)
    )
)]
pub async fn notify(
    Path(chat_id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
    Json(request): Json<NotifyBody>,
) -> GatewayResult<Json<NotificationResponse>> {
    let notification = state.directory.notify(chat_id, &request.text).await?;
    Ok(Json(NotificationResponse {
        body: notification.body,
        mentions: notification.mentions,
    }))
}
