//! Storage factory for selecting the usuario backend

use std::sync::Arc;

use tracing::info;

use super::postgres::{Database, PostgresConfig};
use crate::domain::{DomainError, UsuarioRepository};
use crate::infrastructure::usuario::{InMemoryUsuarioRepository, PostgresUsuarioRepository};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for creating usuario repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the repository for the selected backend
    pub fn create_usuario_repository(
        storage_type: StorageType,
        config: &PostgresConfig,
    ) -> Result<Arc<dyn UsuarioRepository>, DomainError> {
        match storage_type {
            StorageType::InMemory => {
                info!("Using in-memory storage for usuarios");
                Ok(Arc::new(InMemoryUsuarioRepository::new()))
            }
            StorageType::Postgres => {
                info!(
                    host = %config.host,
                    database = %config.database,
                    max_connections = config.max_connections,
                    "Using PostgreSQL storage for usuarios"
                );
                let database = Database::connect_lazy(config)?;
                Ok(Arc::new(PostgresUsuarioRepository::new(database)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("mysql"), None);
    }

    #[tokio::test]
    async fn test_in_memory_repository_probe() {
        let repository = StorageFactory::create_usuario_repository(
            StorageType::InMemory,
            &PostgresConfig::default(),
        )
        .unwrap();

        assert!(repository.probe().await);
        assert!(repository.list().await.unwrap().is_empty());
    }
}
