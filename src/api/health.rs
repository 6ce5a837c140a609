//! Health and connectivity endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;
use crate::api::types::Json;

pub const ROOT_MESSAGE: &str = "servidor funcionando correctamente";
pub const DB_OK_MESSAGE: &str = "Conexión a la base de datos establecida correctamente";
pub const DB_ERROR_MESSAGE: &str = "Error al probar la conexión a la base de datos";

/// Health response with optional component checks
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Root liveness text
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Server is running", body = String))
)]
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Database connectivity check
#[utoipa::path(
    get,
    path = "/test-db",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = String),
        (status = 500, description = "Database unreachable", body = String)
    )
)]
pub async fn test_db(State(state): State<AppState>) -> impl IntoResponse {
    if state.usuario_service.probe().await {
        (StatusCode::OK, DB_OK_MESSAGE)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, DB_ERROR_MESSAGE)
    }
}

/// Service health and version
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check including the database
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to serve requests", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let database = check_database(&state).await;
    let status = database.status;

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![database]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_database(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    let status = if state.usuario_service.probe().await {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    HealthCheck {
        name: "database".to_string(),
        status,
        latency_ms: Some(start.elapsed().as_millis() as u64),
    }
}
