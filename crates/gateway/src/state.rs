//! Shared application state for the gateway

use rollcall_roles::DirectoryService;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state containing the directory service
#[derive(Clone)]
pub struct GatewayState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Role directory service
    pub directory: Arc<DirectoryService>,
}

impl GatewayState {
    /// Create a new gateway state with the directory service initialized
    pub fn new(pool: SqlitePool) -> Self {
        let directory = Arc::new(DirectoryService::new(pool.clone()));
        Self { pool, directory }
    }
}
