use serde::{Deserialize, Serialize};

/// A named, chat-scoped group that users can join and leave.
///
/// Role names are unique within a chat but may be reused across chats.
/// Roles are never renamed or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Database primary key, assigned on creation and never reused
    pub id: i64,
    /// Chat this role is scoped to
    pub chat_id: i64,
    /// Display name, unique per chat, case-sensitive
    pub name: String,
}
