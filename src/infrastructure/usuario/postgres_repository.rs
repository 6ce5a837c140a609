//! PostgreSQL usuario repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::statements;
use crate::domain::{DomainError, Usuario, UsuarioFields, UsuarioFilter, UsuarioId, UsuarioRepository};
use crate::infrastructure::storage::Database;

/// PostgreSQL implementation of UsuarioRepository
///
/// Expects the `usuarios` table to exist with a `BIGSERIAL` primary key and
/// eight `TEXT NOT NULL` columns.
#[derive(Debug, Clone)]
pub struct PostgresUsuarioRepository {
    database: Database,
}

impl PostgresUsuarioRepository {
    /// Create a new repository over the given gateway
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsuarioRepository for PostgresUsuarioRepository {
    async fn list(&self) -> Result<Vec<Usuario>, DomainError> {
        let rows = self.database.fetch_all(&statements::select_all()).await?;
        rows_to_usuarios(rows)
    }

    async fn search(&self, filter: &UsuarioFilter) -> Result<Vec<Usuario>, DomainError> {
        let rows = self.database.fetch_all(&statements::search(filter)).await?;
        rows_to_usuarios(rows)
    }

    async fn get(&self, id: UsuarioId) -> Result<Option<Usuario>, DomainError> {
        let row = self
            .database
            .fetch_optional(&statements::select_by_id(id))
            .await?;

        match row {
            Some(row) => Ok(Some(row_to_usuario(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, fields: &UsuarioFields) -> Result<UsuarioId, DomainError> {
        let row = self.database.fetch_one(&statements::insert(fields)).await?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to read generated id: {}", e)))?;

        Ok(UsuarioId::new(id))
    }

    async fn update(&self, id: UsuarioId, fields: &UsuarioFields) -> Result<bool, DomainError> {
        let affected = self
            .database
            .execute(&statements::update(id, fields))
            .await?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: UsuarioId) -> Result<bool, DomainError> {
        let affected = self.database.execute(&statements::delete(id)).await?;

        Ok(affected > 0)
    }

    async fn probe(&self) -> bool {
        self.database.probe().await
    }
}

fn rows_to_usuarios(rows: Vec<PgRow>) -> Result<Vec<Usuario>, DomainError> {
    let mut usuarios = Vec::with_capacity(rows.len());

    for row in rows {
        usuarios.push(row_to_usuario(&row)?);
    }

    Ok(usuarios)
}

fn row_to_usuario(row: &PgRow) -> Result<Usuario, DomainError> {
    let text = |column: &str| -> Result<String, DomainError> {
        row.try_get(column).map_err(|e| {
            DomainError::storage(format!("Failed to read column '{}': {}", column, e))
        })
    };

    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read column 'id': {}", e)))?;

    let fields = UsuarioFields {
        nombre: text("nombre")?,
        telefono: text("teléfono")?,
        correo: text("correo")?,
        profesional: text("profesional")?,
        mensaje: text("mensaje")?,
        disponibilidad: text("disponibilidad")?,
        tarifa: text("tarifa")?,
        ciudad: text("ciudad")?,
    };

    Ok(Usuario::new(UsuarioId::new(id), fields))
}
