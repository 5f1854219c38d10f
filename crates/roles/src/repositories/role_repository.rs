//! Repository for role and membership data access.
//!
//! This is the single owner of the persisted relations. Uniqueness of
//! `(chat_id, name)` and `(role_id, user_id)` is enforced by the storage
//! layer's UNIQUE constraints, so interleaved or parallel callers cannot
//! produce duplicate rows regardless of in-process scheduling.

use crate::entities::{Membership, Role};
use crate::types::{RoleError, RoleResult};
use sqlx::{Row, SqlitePool};

/// Repository for role database operations
#[derive(Clone)]
pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    /// Create a new role repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new role, failing with `DuplicateRole` when the name is
    /// already taken within the chat.
    pub async fn create(&self, chat_id: i64, name: &str) -> RoleResult<Role> {
        let result = sqlx::query("INSERT INTO roles (chat_id, name) VALUES (?, ?)")
            .bind(chat_id)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RoleError::duplicate_role(name)
                }
                other => RoleError::Database(other),
            })?;

        Ok(Role {
            id: result.last_insert_rowid(),
            chat_id,
            name: name.to_string(),
        })
    }

    /// Look up a role by chat and exact name. Case-sensitive, no side effect.
    pub async fn find_by_name(&self, chat_id: i64, name: &str) -> RoleResult<Option<Role>> {
        let row = sqlx::query("SELECT id, chat_id, name FROM roles WHERE chat_id = ? AND name = ?")
            .bind(chat_id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Role {
            id: row.get("id"),
            chat_id: row.get("chat_id"),
            name: row.get("name"),
        }))
    }

    /// List all roles in a chat, lexicographically ordered by name.
    pub async fn list_by_chat(&self, chat_id: i64) -> RoleResult<Vec<Role>> {
        let rows =
            sqlx::query("SELECT id, chat_id, name FROM roles WHERE chat_id = ? ORDER BY name")
                .bind(chat_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| Role {
                id: row.get("id"),
                chat_id: row.get("chat_id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Add a user to a role. Idempotent: a repeat join keeps the existing
    /// row, including the first-seen username.
    pub async fn add_member(
        &self,
        role_id: i64,
        user_id: i64,
        username: &str,
    ) -> RoleResult<()> {
        sqlx::query("INSERT OR IGNORE INTO role_users (role_id, user_id, username) VALUES (?, ?, ?)")
            .bind(role_id)
            .bind(user_id)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove a user from a role. Idempotent no-op when no membership exists.
    pub async fn remove_member(&self, role_id: i64, user_id: i64) -> RoleResult<()> {
        sqlx::query("DELETE FROM role_users WHERE role_id = ? AND user_id = ?")
            .bind(role_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Every membership row of a role, empty usernames included. Order is
    /// unspecified.
    pub async fn members(&self, role_id: i64) -> RoleResult<Vec<Membership>> {
        let rows =
            sqlx::query("SELECT role_id, user_id, username FROM role_users WHERE role_id = ?")
                .bind(role_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| Membership {
                role_id: row.get("role_id"),
                user_id: row.get("user_id"),
                username: row.get("username"),
            })
            .collect())
    }

    /// Names of every role in a chat the user currently belongs to.
    pub async fn role_names_for_user(
        &self,
        chat_id: i64,
        user_id: i64,
    ) -> RoleResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT roles.name FROM roles \
             JOIN role_users ON roles.id = role_users.role_id \
             WHERE role_users.user_id = ? AND roles.chat_id = ?",
        )
        .bind(user_id)
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.get("name")).collect())
    }
}
