//! Usuarios API
//!
//! CRUD HTTP service for service-provider listings with:
//! - Shared-secret bearer token protection
//! - PostgreSQL or in-memory storage
//! - OpenAPI documentation and Swagger UI
//! - Structured logging, optional OpenTelemetry export and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::TokenGate;
use infrastructure::storage::{StorageFactory, StorageType};
use infrastructure::usuario::UsuarioService;
use tracing::info;

/// Create the application state with custom configuration
///
/// The database pool is created lazily; no connection is attempted here.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("Unknown storage backend '{}'", config.storage.backend)
    })?;

    info!("Storage backend: {:?}", storage_backend);

    let repository = StorageFactory::create_usuario_repository(storage_backend, &config.database)?;
    let usuario_service = Arc::new(UsuarioService::new(repository));
    let token_gate = Arc::new(TokenGate::new(&config.auth.token));

    Ok(AppState::new(usuario_service, token_gate))
}
