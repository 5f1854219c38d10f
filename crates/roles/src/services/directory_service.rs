//! Directory service translating external requests into store calls.

use crate::entities::Role;
use crate::repositories::RoleRepository;
use crate::types::{require_name, MemberList, Notification, NotifyRequest, RoleError, RoleResult};
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Use-case layer for the role directory.
///
/// Validates raw input, resolves role names to rows, and builds
/// formatting-neutral results. Every operation is a single atomic request
/// against the store; there is no cross-request state held here.
pub struct DirectoryService {
    roles: RoleRepository,
}

impl DirectoryService {
    /// Create a new directory service instance
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            roles: RoleRepository::new(pool),
        }
    }

    /// Create a role in a chat. Fails with `EmptyInput` on a blank name and
    /// `DuplicateRole` when the name is already taken in that chat.
    pub async fn create_role(&self, chat_id: i64, raw_name: &str) -> RoleResult<Role> {
        let name = require_name(raw_name)?;
        let role = self.roles.create(chat_id, name).await?;
        info!(chat_id, role = %role.name, role_id = role.id, "role created");
        Ok(role)
    }

    /// List all role names in a chat, lexicographically sorted. An empty
    /// list is a valid outcome, not an error.
    pub async fn list_roles(&self, chat_id: i64) -> RoleResult<Vec<String>> {
        let roles = self.roles.list_by_chat(chat_id).await?;
        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    /// Add a user to a role. Silent success on repeat joins; the stored
    /// username stays the one from the first join.
    pub async fn join_role(
        &self,
        chat_id: i64,
        raw_name: &str,
        user_id: i64,
        username: &str,
    ) -> RoleResult<()> {
        let role = self.resolve(chat_id, raw_name).await?;
        self.roles.add_member(role.id, user_id, username).await?;
        debug!(chat_id, role = %role.name, user_id, "user joined role");
        Ok(())
    }

    /// Remove a user from a role. Silent no-op when not a member.
    pub async fn leave_role(&self, chat_id: i64, raw_name: &str, user_id: i64) -> RoleResult<()> {
        let role = self.resolve(chat_id, raw_name).await?;
        self.roles.remove_member(role.id, user_id).await?;
        debug!(chat_id, role = %role.name, user_id, "user left role");
        Ok(())
    }

    /// List the visible mention handles of a role's members.
    pub async fn list_members(&self, chat_id: i64, raw_name: &str) -> RoleResult<MemberList> {
        let role = self.resolve(chat_id, raw_name).await?;
        self.visible_members(role.id).await
    }

    /// Names of every role in the chat the user currently belongs to.
    pub async fn my_roles(&self, chat_id: i64, user_id: i64) -> RoleResult<Vec<String>> {
        self.roles.role_names_for_user(chat_id, user_id).await
    }

    /// Prepare a notification to every visible member of a role.
    ///
    /// `raw` carries the role name as its first whitespace-delimited token
    /// and the message body after it. The returned `Notification` is handed
    /// to the adapter for formatting and delivery.
    pub async fn notify(&self, chat_id: i64, raw: &str) -> RoleResult<Notification> {
        let request = NotifyRequest::parse(raw)?;
        let role = self.resolve(chat_id, &request.role).await?;

        let members = self.visible_members(role.id).await?;
        if members.is_empty() {
            return Err(RoleError::no_members(role.name));
        }

        debug!(chat_id, role = %role.name, mentions = members.handles.len(), "notification prepared");
        Ok(Notification {
            body: request.body,
            mentions: members.handles,
        })
    }

    async fn visible_members(&self, role_id: i64) -> RoleResult<MemberList> {
        let memberships = self.roles.members(role_id).await?;
        Ok(MemberList::from_usernames(
            memberships.into_iter().map(|m| m.username).collect(),
        ))
    }

    /// Resolve a raw role name to its row, validating the name first.
    async fn resolve(&self, chat_id: i64, raw_name: &str) -> RoleResult<Role> {
        let name = require_name(raw_name)?;
        self.roles
            .find_by_name(chat_id, name)
            .await?
            .ok_or_else(|| RoleError::role_not_found(name))
    }
}
