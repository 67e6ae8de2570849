mod health;

use axum::{routing::get, Router};

/// Create all routes for the application
pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(health::status))
        .route("/health", get(health::health))
}
