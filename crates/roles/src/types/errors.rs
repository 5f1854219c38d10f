//! Error types for the role directory.

use thiserror::Error;

/// Result type alias for role directory operations
pub type RoleResult<T> = Result<T, RoleError>;

/// Main error type for the role directory
///
/// All variants except `Database` are expected, locally recoverable outcomes
/// that the adapter renders to the requesting user. `Database` carries any
/// unanticipated storage failure; it is reported generically and never
/// retried.
#[derive(Debug, Error)]
pub enum RoleError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Required text is empty")]
    EmptyInput,

    #[error("Role already exists: {name}")]
    DuplicateRole { name: String },

    #[error("Role not found: {name}")]
    RoleNotFound { name: String },

    #[error("Notification is missing a message body")]
    MissingBody,

    #[error("Role has no members to notify: {name}")]
    NoMembers { name: String },
}

impl RoleError {
    /// Create a duplicate role error
    pub fn duplicate_role(name: impl Into<String>) -> Self {
        Self::DuplicateRole { name: name.into() }
    }

    /// Create a not found error for roles
    pub fn role_not_found(name: impl Into<String>) -> Self {
        Self::RoleNotFound { name: name.into() }
    }

    /// Create a no-members error
    pub fn no_members(name: impl Into<String>) -> Self {
        Self::NoMembers { name: name.into() }
    }
}
