//! Domain layer - Core business logic and entities

pub mod error;
pub mod usuario;

pub use error::DomainError;
pub use usuario::{
    validate_usuario, SearchField, Usuario, UsuarioDraft, UsuarioFields, UsuarioFilter,
    UsuarioId, UsuarioRepository, UsuarioValidationError,
};
