//! Usuario domain
//!
//! A usuario is a service-provider listing: who offers the service, how to
//! reach them, what they do, and where and when they work.

mod entity;
mod filter;
mod repository;
mod validation;

pub use entity::{Usuario, UsuarioFields, UsuarioId};
pub use filter::{SearchField, UsuarioFilter};
pub use repository::UsuarioRepository;
pub use validation::{validate_usuario, UsuarioDraft, UsuarioValidationError};

#[cfg(test)]
pub use repository::MockUsuarioRepository;
