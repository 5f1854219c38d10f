//! Rollcall Database Crate
//!
//! Connection management and schema migrations for the role directory.
//! Repositories live in `rollcall-roles`; this crate only hands out a
//! ready-to-use `SqlitePool`.

use sqlx::SqlitePool;
use thiserror::Error;

pub use rollcall_config::DatabaseConfig;

pub mod connection;
pub mod migrations;

pub use connection::prepare_database;
pub use migrations::{run_migrations, MIGRATOR};

/// Result type alias for database bootstrap operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Errors raised while bringing up the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("migration error: {0}")]
    Migration(String),
}

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    Ok(pool)
}
