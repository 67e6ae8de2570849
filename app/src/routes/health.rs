use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

pub const STATUS_MESSAGE: &str = "Pipeline CI funcionando!";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Root endpoint with service status and version
pub async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        message: STATUS_MESSAGE,
        status: "healthy",
        version: VERSION,
    })
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
