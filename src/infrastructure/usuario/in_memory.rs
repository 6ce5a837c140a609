//! In-memory usuario repository
//!
//! Follows the same search policy as the PostgreSQL repository and returns
//! results ordered by ID.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, Usuario, UsuarioFields, UsuarioFilter, UsuarioId, UsuarioRepository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UsuarioId, UsuarioFields>,
    last_id: i64,
}

/// In-memory implementation of UsuarioRepository
#[derive(Debug, Default)]
pub struct InMemoryUsuarioRepository {
    table: RwLock<Table>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored usuarios
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn list(&self) -> Result<Vec<Usuario>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .iter()
            .map(|(id, fields)| Usuario::new(*id, fields.clone()))
            .collect())
    }

    async fn search(&self, filter: &UsuarioFilter) -> Result<Vec<Usuario>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .iter()
            .filter(|(_, fields)| filter.matches(fields))
            .map(|(id, fields)| Usuario::new(*id, fields.clone()))
            .collect())
    }

    async fn get(&self, id: UsuarioId) -> Result<Option<Usuario>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .get(&id)
            .map(|fields| Usuario::new(id, fields.clone())))
    }

    async fn create(&self, fields: &UsuarioFields) -> Result<UsuarioId, DomainError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let id = UsuarioId::new(table.last_id);
        table.rows.insert(id, fields.clone());

        Ok(id)
    }

    async fn update(&self, id: UsuarioId, fields: &UsuarioFields) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&id) {
            Some(existing) => {
                *existing = fields.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UsuarioId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn probe(&self) -> bool {
        true
    }
}
