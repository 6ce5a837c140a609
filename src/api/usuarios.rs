//! Usuario endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::api::middleware::RequireToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Json, Query};
use crate::domain::{Usuario, UsuarioDraft, UsuarioFilter};

pub const CREATED_MESSAGE: &str = "Usuario creado correctamente";
pub const UPDATED_MESSAGE: &str = "Usuario actualizado correctamente";
pub const DELETED_MESSAGE: &str = "Usuario eliminado correctamente";

/// Body of create and update requests
///
/// Strings are taken as-is and numbers as their decimal text; absent, null,
/// empty and any other JSON value count as missing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UsuarioRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Ana")]
    pub nombre: Option<Value>,
    #[serde(default, rename = "teléfono", alias = "telefono")]
    #[schema(value_type = Option<String>, example = "611222333")]
    pub telefono: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "ana@example.com")]
    pub correo: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "electricista")]
    pub profesional: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Instalaciones y reparaciones")]
    pub mensaje: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "mañanas")]
    pub disponibilidad: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "30")]
    pub tarifa: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Madrid")]
    pub ciudad: Option<Value>,
}

impl From<UsuarioRequest> for UsuarioDraft {
    fn from(request: UsuarioRequest) -> Self {
        Self {
            nombre: field_text(request.nombre),
            telefono: field_text(request.telefono),
            correo: field_text(request.correo),
            profesional: field_text(request.profesional),
            mensaje: field_text(request.mensaje),
            disponibilidad: field_text(request.disponibilidad),
            tarifa: field_text(request.tarifa),
            ciudad: field_text(request.ciudad),
        }
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Public usuario record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: i64,
    pub nombre: String,
    #[serde(rename = "teléfono")]
    pub telefono: String,
    pub correo: String,
    pub profesional: String,
    pub mensaje: String,
    pub disponibilidad: String,
    pub tarifa: String,
    pub ciudad: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        let id = usuario.id().value();
        let fields = usuario.into_fields();

        Self {
            id,
            nombre: fields.nombre,
            telefono: fields.telefono,
            correo: fields.correo,
            profesional: fields.profesional,
            mensaje: fields.mensaje,
            disponibilidad: fields.disponibilidad,
            tarifa: fields.tarifa,
            ciudad: fields.ciudad,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Usuario creado correctamente")]
    pub mensaje: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// Partial-match search filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring of the name
    pub nombre: Option<String>,
    /// Substring of the email
    pub correo: Option<String>,
    /// Substring of the profession
    pub profesional: Option<String>,
}

impl SearchParams {
    /// Build filters from raw query pairs; the first value of a repeated key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "nombre" => &mut params.nombre,
                "correo" => &mut params.correo,
                "profesional" => &mut params.profesional,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

impl From<SearchParams> for UsuarioFilter {
    fn from(params: SearchParams) -> Self {
        Self {
            nombre: params.nombre,
            correo: params.correo,
            profesional: params.profesional,
        }
    }
}

/// Create the usuarios router
pub fn create_usuarios_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_usuarios).post(create_usuario))
        .route("/users/search", get(search_usuarios))
        .route("/users/{id}", put(update_usuario).delete(delete_usuario))
}

/// List every usuario
#[utoipa::path(
    get,
    path = "/users",
    tag = "usuarios",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All usuarios ordered by id", body = [UsuarioResponse]),
        (status = 403, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    )
)]
pub async fn list_usuarios(
    _: RequireToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<UsuarioResponse>>, ApiError> {
    debug!("Listing usuarios");

    let usuarios = state.usuario_service.list().await?;

    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

/// Search usuarios by partial, case-insensitive matches
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "usuarios",
    params(SearchParams),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Matching usuarios ordered by id", body = [UsuarioResponse]),
        (status = 403, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    )
)]
pub async fn search_usuarios(
    _: RequireToken,
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<UsuarioResponse>>, ApiError> {
    let filter = UsuarioFilter::from(SearchParams::from_pairs(pairs));
    let usuarios = state.usuario_service.search(&filter).await?;

    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

/// Create a usuario
#[utoipa::path(
    post,
    path = "/users",
    tag = "usuarios",
    request_body = UsuarioRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Usuario created", body = CreatedResponse),
        (status = 400, description = "Missing fields or malformed body", body = ApiErrorResponse),
        (status = 403, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    )
)]
pub async fn create_usuario(
    _: RequireToken,
    State(state): State<AppState>,
    Json(request): Json<UsuarioRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.usuario_service.create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            mensaje: CREATED_MESSAGE.to_string(),
            id: id.value(),
        }),
    ))
}

/// Replace every field of a usuario
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "usuarios",
    params(("id" = i64, Path, description = "Usuario id")),
    request_body = UsuarioRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Usuario updated", body = MessageResponse),
        (status = 400, description = "Missing fields or malformed body", body = ApiErrorResponse),
        (status = 403, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Usuario not found", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    )
)]
pub async fn update_usuario(
    _: RequireToken,
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    Json(request): Json<UsuarioRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.usuario_service.update(&path_id(id), request.into()).await?;

    Ok(Json(MessageResponse {
        mensaje: UPDATED_MESSAGE.to_string(),
    }))
}

/// Delete a usuario
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "usuarios",
    params(("id" = i64, Path, description = "Usuario id")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Usuario deleted", body = MessageResponse),
        (status = 403, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Usuario not found", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    )
)]
pub async fn delete_usuario(
    _: RequireToken,
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.usuario_service.delete(&path_id(id)).await?;

    Ok(Json(MessageResponse {
        mensaje: DELETED_MESSAGE.to_string(),
    }))
}

/// Undecodable id segments are passed on as an empty id, which matches no usuario
fn path_id(id: Result<Path<String>, PathRejection>) -> String {
    match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!("Unreadable usuario id: {}", rejection.body_text());
            String::new()
        }
    }
}
