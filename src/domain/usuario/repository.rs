//! Usuario repository trait

use async_trait::async_trait;

use super::entity::{Usuario, UsuarioFields, UsuarioId};
use super::filter::UsuarioFilter;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for usuario storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// List every usuario, ordered by ID
    async fn list(&self) -> Result<Vec<Usuario>, DomainError>;

    /// List usuarios matching the filter, ordered by ID
    async fn search(&self, filter: &UsuarioFilter) -> Result<Vec<Usuario>, DomainError>;

    /// Get a usuario by ID
    async fn get(&self, id: UsuarioId) -> Result<Option<Usuario>, DomainError>;

    /// Insert a new usuario and return its generated ID
    async fn create(&self, fields: &UsuarioFields) -> Result<UsuarioId, DomainError>;

    /// Overwrite all fields of a usuario; returns false if no row was updated
    async fn update(&self, id: UsuarioId, fields: &UsuarioFields) -> Result<bool, DomainError>;

    /// Delete a usuario; returns false if no row was deleted
    async fn delete(&self, id: UsuarioId) -> Result<bool, DomainError>;

    /// Check connectivity with the backing store
    async fn probe(&self) -> bool;
}
