use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::handlers;
use crate::api::handlers::users::{self, UserStore};

/// Builds the API router over a shared record store
///
/// The same wiring serves the binary and the integration tests, so every
/// route change is exercised both ways.
pub fn router(store: UserStore) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // User routes
        .route("/api/users", get(users::list_users))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:id", get(users::get_user))
        .route("/api/users/:id", put(users::update_user))
        .route("/api/users/:id", delete(users::delete_user))
        .with_state(store)
}
