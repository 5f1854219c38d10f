//! REST API endpoints for the gateway

pub mod health;
pub mod notify;
pub mod role;

use crate::state::GatewayState;
use axum::Router;
use std::sync::Arc;

/// Create all REST API routes
pub fn create_rest_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .merge(role::create_role_routes())
        .merge(notify::create_notify_routes())
}
