use crate::api::auth::auth::{login, logout, register};
use crate::api::records::records::{
    create_record, delete_record, get_record, list_records, update_record,
};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Auth endpoints
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        // Customer record endpoints
        .route("/api/v1/records", get(list_records).post(create_record))
        .route(
            "/api/v1/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
