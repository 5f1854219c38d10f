//! # Rollcall Gateway Crate
//!
//! HTTP adapter for the role directory. Routes inbound requests to the
//! `DirectoryService` and renders its plain results and typed errors as
//! JSON; no business rules live here, and every entry point goes through
//! the same service methods so validation and idempotency stay centralized.

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{GatewayError, GatewayResult};
pub use state::GatewayState;

use axum::{http::Method, middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[cfg(debug_assertions)]
mod docs {
    use super::rest;
    use utoipa::OpenApi;

    #[derive(OpenApi)]
    #[openapi(
        paths(
            rest::health::health_check,
            rest::role::create_role,
            rest::role::list_roles,
            rest::role::join_role,
            rest::role::leave_role,
            rest::role::list_members,
            rest::role::my_roles,
            rest::notify::notify,
        ),
        components(schemas(
            rest::health::HealthResponse,
            rest::role::CreateRoleRequest,
            rest::role::RoleResponse,
            rest::role::RolesResponse,
            rest::role::JoinRoleRequest,
            rest::role::LeaveRoleRequest,
            rest::role::AckResponse,
            rest::role::MembersResponse,
            rest::role::ErrorResponse,
            rest::notify::NotifyBody,
            rest::notify::NotificationResponse,
        )),
        tags(
            (name = "Roles", description = "Chat-scoped role directory"),
            (name = "Notify", description = "Role notification fan-out"),
            (name = "Health", description = "Service health")
        )
    )]
    pub struct ApiDoc;
}

/// Create the main application router with all routes
pub fn create_router(state: GatewayState) -> Router {
    let arc_state = Arc::new(state);
    let router = Router::new()
        .nest("/api", rest::create_rest_routes().with_state(arc_state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .layer(axum_middleware::from_fn(middleware::logging_middleware));

    // Serve Swagger UI in debug builds only
    #[cfg(debug_assertions)]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
    };

    router
}
