//! Usuario service for listing management

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    validate_usuario, DomainError, Usuario, UsuarioDraft, UsuarioFilter, UsuarioId,
    UsuarioRepository,
};

/// Message returned when the target usuario does not exist
pub const NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";

/// Usuario service for managing listings
#[derive(Clone)]
pub struct UsuarioService {
    repository: Arc<dyn UsuarioRepository>,
}

impl std::fmt::Debug for UsuarioService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsuarioService").finish_non_exhaustive()
    }
}

impl UsuarioService {
    /// Create a new usuario service
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    /// List all usuarios
    pub async fn list(&self) -> Result<Vec<Usuario>, DomainError> {
        let usuarios = self.repository.list().await?;
        debug!(count = usuarios.len(), "Listed usuarios");
        Ok(usuarios)
    }

    /// Search usuarios by partial nombre, correo and profesional
    pub async fn search(&self, filter: &UsuarioFilter) -> Result<Vec<Usuario>, DomainError> {
        let usuarios = self.repository.search(filter).await?;
        debug!(
            nombre = ?filter.nombre,
            correo = ?filter.correo,
            profesional = ?filter.profesional,
            count = usuarios.len(),
            "Searched usuarios"
        );
        Ok(usuarios)
    }

    /// Create a new usuario
    pub async fn create(&self, draft: UsuarioDraft) -> Result<UsuarioId, DomainError> {
        let fields = validate_usuario(draft).map_err(|e| {
            debug!(missing = ?e.missing_fields(), "Rejected usuario creation");
            DomainError::validation(e.to_string())
        })?;

        let id = self.repository.create(&fields).await?;
        info!(id = %id, "Created usuario");

        Ok(id)
    }

    /// Replace every field of an existing usuario
    ///
    /// Fields are validated before the store is touched. An ID that is not an
    /// integer cannot exist and is reported as not found.
    pub async fn update(&self, id: &str, draft: UsuarioDraft) -> Result<(), DomainError> {
        let fields = validate_usuario(draft).map_err(|e| {
            debug!(id = %id, missing = ?e.missing_fields(), "Rejected usuario update");
            DomainError::validation(e.to_string())
        })?;

        let usuario_id = self.existing_id(id).await?;

        // Row may vanish between the existence check and the write
        if !self.repository.update(usuario_id, &fields).await? {
            warn!(id = %usuario_id, "Usuario disappeared before update");
            return Err(DomainError::not_found(NOT_FOUND_MESSAGE));
        }

        info!(id = %usuario_id, "Updated usuario");
        Ok(())
    }

    /// Delete an existing usuario
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let usuario_id = self.existing_id(id).await?;

        if !self.repository.delete(usuario_id).await? {
            warn!(id = %usuario_id, "Usuario already deleted by a concurrent request");
        }

        info!(id = %usuario_id, "Deleted usuario");
        Ok(())
    }

    /// Check connectivity with the backing store
    pub async fn probe(&self) -> bool {
        self.repository.probe().await
    }

    async fn existing_id(&self, id: &str) -> Result<UsuarioId, DomainError> {
        let Some(usuario_id) = UsuarioId::parse(id) else {
            debug!(id = %id, "Usuario ID is not an integer");
            return Err(DomainError::not_found(NOT_FOUND_MESSAGE));
        };

        if self.repository.get(usuario_id).await?.is_none() {
            debug!(id = %usuario_id, "Usuario not found");
            return Err(DomainError::not_found(NOT_FOUND_MESSAGE));
        }

        Ok(usuario_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::usuario::MockUsuarioRepository;
    use crate::domain::UsuarioFields;
    use crate::infrastructure::usuario::InMemoryUsuarioRepository;

    fn draft() -> UsuarioDraft {
        UsuarioDraft {
            nombre: Some("Ana".to_string()),
            telefono: Some("611222333".to_string()),
            correo: Some("ana@example.com".to_string()),
            profesional: Some("electricista".to_string()),
            mensaje: Some("Reparaciones urgentes".to_string()),
            disponibilidad: Some("mañanas".to_string()),
            tarifa: Some("30".to_string()),
            ciudad: Some("Madrid".to_string()),
        }
    }

    fn fields() -> UsuarioFields {
        validate_usuario(draft()).unwrap()
    }

    fn create_service() -> UsuarioService {
        UsuarioService::new(Arc::new(InMemoryUsuarioRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = create_service();

        let id = service.create(draft()).await.unwrap();
        let usuarios = service.list().await.unwrap();

        assert_eq!(usuarios.len(), 1);
        assert_eq!(usuarios[0].id(), id);
        assert_eq!(usuarios[0].fields().nombre, "Ana");
    }

    #[tokio::test]
    async fn test_create_missing_field_never_touches_storage() {
        let mut repository = MockUsuarioRepository::new();
        repository.expect_create().never();

        let service = UsuarioService::new(Arc::new(repository));
        let mut incomplete = draft();
        incomplete.tarifa = None;

        let result = service.create(incomplete).await;

        match result {
            Err(DomainError::Validation { message }) => {
                assert_eq!(message, "Faltan campos obligatorios");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_empty_field_is_missing() {
        let service = create_service();
        let mut incomplete = draft();
        incomplete.ciudad = Some(String::new());

        let result = service.create(incomplete).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let mut repository = MockUsuarioRepository::new();
        repository.expect_get().never();
        repository.expect_update().never();

        let service = UsuarioService::new(Arc::new(repository));
        let mut incomplete = draft();
        incomplete.correo = None;

        let result = service.update("999", incomplete).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_non_numeric_id_is_not_found() {
        let mut repository = MockUsuarioRepository::new();
        repository.expect_get().never();

        let service = UsuarioService::new(Arc::new(repository));

        let result = service.update("abc", draft()).await;

        match result {
            Err(DomainError::NotFound { message }) => assert_eq!(message, NOT_FOUND_MESSAGE),
            other => panic!("Expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = create_service();

        let result = service.update("999", draft()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = create_service();
        let id = service.create(draft()).await.unwrap();

        let mut changed = draft();
        changed.ciudad = Some("Bilbao".to_string());
        service.update(&id.to_string(), changed).await.unwrap();

        let usuarios = service.list().await.unwrap();
        assert_eq!(usuarios[0].fields().ciudad, "Bilbao");
    }

    #[tokio::test]
    async fn test_update_row_vanished_is_not_found() {
        let mut repository = MockUsuarioRepository::new();
        repository
            .expect_get()
            .returning(|id| Ok(Some(Usuario::new(id, fields()))));
        repository.expect_update().times(1).returning(|_, _| Ok(false));

        let service = UsuarioService::new(Arc::new(repository));

        let result = service.update("7", draft()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = create_service();
        let id = service.create(draft()).await.unwrap();

        service.delete(&id.to_string()).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(
            service.delete(&id.to_string()).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_is_not_found() {
        let service = create_service();

        let result = service.delete("1; DROP TABLE usuarios").await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_row_vanished_still_succeeds() {
        let mut repository = MockUsuarioRepository::new();
        repository
            .expect_get()
            .returning(|id| Ok(Some(Usuario::new(id, fields()))));
        repository.expect_delete().times(1).returning(|_| Ok(false));

        let service = UsuarioService::new(Arc::new(repository));

        assert!(service.delete("7").await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut repository = MockUsuarioRepository::new();
        repository
            .expect_list()
            .returning(|| Err(DomainError::storage("connection refused")));

        let service = UsuarioService::new(Arc::new(repository));

        match service.list().await {
            Err(DomainError::Storage { message }) => assert_eq!(message, "connection refused"),
            other => panic!("Expected storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_by_profesional() {
        let service = create_service();
        let id = service.create(draft()).await.unwrap();

        let mut other = draft();
        other.nombre = Some("Luis".to_string());
        other.profesional = Some("fontanero".to_string());
        service.create(other).await.unwrap();

        let found = service
            .search(&UsuarioFilter::new().with_profesional("electric"))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), id);
    }

    #[tokio::test]
    async fn test_probe() {
        let mut repository = MockUsuarioRepository::new();
        repository.expect_probe().returning(|| false);

        let service = UsuarioService::new(Arc::new(repository));

        assert!(!service.probe().await);
        assert!(create_service().probe().await);
    }
}
