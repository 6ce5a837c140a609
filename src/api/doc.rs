//! OpenAPI documentation
//!
//! Registers every handler and the shared-secret bearer scheme used by the
//! `/users` routes.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::health::{HealthCheck, HealthResponse, HealthStatus};
use super::types::{ApiErrorCode, ApiErrorResponse};
use super::usuarios::{CreatedResponse, MessageResponse, UsuarioRequest, UsuarioResponse};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Shared secret configured on the server"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Usuarios API",
        description = "Service-provider listings: create, list, search, update and delete."
    ),
    paths(
        super::health::root,
        super::health::test_db,
        super::health::health_check,
        super::health::ready_check,
        super::usuarios::list_usuarios,
        super::usuarios::search_usuarios,
        super::usuarios::create_usuario,
        super::usuarios::update_usuario,
        super::usuarios::delete_usuario,
    ),
    components(schemas(
        UsuarioRequest,
        UsuarioResponse,
        CreatedResponse,
        MessageResponse,
        ApiErrorResponse,
        ApiErrorCode,
        HealthResponse,
        HealthStatus,
        HealthCheck,
    )),
    tags(
        (name = "usuarios", description = "Service-provider listings"),
        (name = "health", description = "Liveness and connectivity")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty JSON
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in ["/", "/test-db", "/health", "/ready", "/users", "/users/search", "/users/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.schemas.contains_key("UsuarioResponse"));
    }

    #[test]
    fn test_json_uses_accented_key() {
        let json = openapi_json().unwrap();

        assert!(json.contains("teléfono"));
        assert!(json.contains("bearerAuth"));
    }
}
