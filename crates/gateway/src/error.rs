//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rollcall_roles::RoleError;
use serde_json::json;
use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Nothing to do: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = json!({
            "error": status.as_str(),
            "message": self.to_string(),
        });

        (status, Json(error_response)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<RoleError> for GatewayError {
    fn from(error: RoleError) -> Self {
        match error {
            RoleError::EmptyInput | RoleError::MissingBody => {
                GatewayError::InvalidRequest(error.to_string())
            }
            RoleError::RoleNotFound { .. } => GatewayError::NotFound(error.to_string()),
            RoleError::DuplicateRole { .. } => GatewayError::Conflict(error.to_string()),
            RoleError::NoMembers { .. } => GatewayError::Unprocessable(error.to_string()),
            RoleError::Database(e) => GatewayError::DatabaseError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_errors_map_to_expected_statuses() {
        let cases = [
            (RoleError::EmptyInput, StatusCode::BAD_REQUEST),
            (RoleError::MissingBody, StatusCode::BAD_REQUEST),
            (
                RoleError::role_not_found("team"),
                StatusCode::NOT_FOUND,
            ),
            (RoleError::duplicate_role("team"), StatusCode::CONFLICT),
            (
                RoleError::no_members("team"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(GatewayError::from(error).status_code(), expected);
        }
    }
}
