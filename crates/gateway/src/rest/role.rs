//! Role REST endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::GatewayResult;
use crate::state::GatewayState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoleRequest {
    /// Role name, unique within the chat
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RolesResponse {
    /// Lexicographically sorted role names
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinRoleRequest {
    pub name: String,
    pub user_id: i64,
    /// Mention handle; absent when the user has none
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LeaveRoleRequest {
    pub name: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    pub status: String,
}

impl AckResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MembersResponse {
    /// Visible mention handles
    pub members: Vec<String>,
    /// Members without a visible handle
    pub hidden: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Create role routes
pub fn create_role_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route(
            "/chats/:chat_id/roles",
            axum::routing::post(create_role).get(list_roles),
        )
        .route("/chats/:chat_id/roles/join", axum::routing::post(join_role))
        .route(
            "/chats/:chat_id/roles/leave",
            axum::routing::post(leave_role),
        )
        .route(
            "/chats/:chat_id/roles/:name/members",
            axum::routing::get(list_members),
        )
        .route(
            "/chats/:chat_id/users/:user_id/roles",
            axum::routing::get(my_roles),
        )
}

#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/roles",
    tag = "Roles",
    params(("chat_id" = i64, Path, description = "Chat ID")),
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = RoleResponse),
        (status = 400, description = "Blank role name", body = ErrorResponse),
        (status = 409, description = "Role already exists in this chat", body = ErrorResponse)
    )
)]
pub async fn create_role(
    Path(chat_id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
    Json(request): Json<CreateRoleRequest>,
) -> GatewayResult<(StatusCode, Json<RoleResponse>)> {
    let role = state.directory.create_role(chat_id, &request.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(RoleResponse {
            id: role.id,
            name: role.name,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/roles",
    tag = "Roles",
    params(("chat_id" = i64, Path, description = "Chat ID")),
    responses(
        (status = 200, description = "Sorted role names, possibly empty", body = RolesResponse)
    )
)]
pub async fn list_roles(
    Path(chat_id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<RolesResponse>> {
    let roles = state.directory.list_roles(chat_id).await?;
    Ok(Json(RolesResponse { roles }))
}

#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/roles/join",
    tag = "Roles",
    params(("chat_id" = i64, Path, description = "Chat ID")),
    request_body = JoinRoleRequest,
    responses(
        (status = 200, description = "Joined (idempotent)", body = AckResponse),
        (status = 400, description = "Blank role name", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn join_role(
    Path(chat_id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
    Json(request): Json<JoinRoleRequest>,
) -> GatewayResult<Json<AckResponse>> {
    let username = request.username.unwrap_or_default();
    state
        .directory
        .join_role(chat_id, &request.name, request.user_id, &username)
        .await?;
    Ok(Json(AckResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/roles/leave",
    tag = "Roles",
    params(("chat_id" = i64, Path, description = "Chat ID")),
    request_body = LeaveRoleRequest,
    responses(
        (status = 200, description = "Left (idempotent)", body = AckResponse),
        (status = 400, description = "Blank role name", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn leave_role(
    Path(chat_id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
    Json(request): Json<LeaveRoleRequest>,
) -> GatewayResult<Json<AckResponse>> {
    state
        .directory
        .leave_role(chat_id, &request.name, request.user_id)
        .await?;
    Ok(Json(AckResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/roles/{name}/members",
    tag = "Roles",
    params(
        ("chat_id" = i64, Path, description = "Chat ID"),
        ("name" = String, Path, description = "Role name")
    ),
    responses(
        (status = 200, description = "Visible member handles", body = MembersResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn list_members(
    Path((chat_id, name)): Path<(i64, String)>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<MembersResponse>> {
    let members = state.directory.list_members(chat_id, &name).await?;
    Ok(Json(MembersResponse {
        members: members.handles,
        hidden: members.hidden,
    }))
}

#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/users/{user_id}/roles",
    tag = "Roles",
    params(
        ("chat_id" = i64, Path, description = "Chat ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Roles the user belongs to in this chat", body = RolesResponse)
    )
)]
pub async fn my_roles(
    Path((chat_id, user_id)): Path<(i64, i64)>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<RolesResponse>> {
    let roles = state.directory.my_roles(chat_id, user_id).await?;
    Ok(Json(RolesResponse { roles }))
}
