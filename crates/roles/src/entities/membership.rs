use serde::{Deserialize, Serialize};

/// The relation of a user belonging to a role.
///
/// `username` is a denormalized display handle captured at join time. It may
/// be empty when the external user has no handle, and it is not refreshed if
/// the user later renames; only an explicit leave and rejoin picks up the
/// new handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Role this membership belongs to
    pub role_id: i64,
    /// External user identity
    pub user_id: i64,
    /// Mention handle at join time, possibly empty
    pub username: String,
}
