//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::TokenGate;
use crate::infrastructure::usuario::UsuarioService;

/// Application state injected into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub usuario_service: Arc<UsuarioService>,
    pub token_gate: Arc<TokenGate>,
}

impl AppState {
    pub fn new(usuario_service: Arc<UsuarioService>, token_gate: Arc<TokenGate>) -> Self {
        Self {
            usuario_service,
            token_gate,
        }
    }
}
