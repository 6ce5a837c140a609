//! Bearer token authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that admits only requests carrying the configured bearer token
///
/// Runs before the body is read, so rejected requests never reach the
/// service or the store.
#[derive(Debug, Clone, Copy)]
pub struct RequireToken;

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Non-UTF-8 header values are treated like a missing header
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        state.token_gate.authorize(header)?;

        Ok(RequireToken)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Request, StatusCode};

    use super::*;
    use crate::infrastructure::auth::{TokenGate, DENIED_MESSAGE};
    use crate::infrastructure::usuario::{InMemoryUsuarioRepository, UsuarioService};

    fn state() -> AppState {
        AppState::new(
            Arc::new(UsuarioService::new(Arc::new(InMemoryUsuarioRepository::new()))),
            Arc::new(TokenGate::new("s3cret")),
        )
    }

    async fn extract(authorization: Option<&str>) -> Result<RequireToken, ApiError> {
        let mut builder = Request::builder().uri("/users");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        RequireToken::from_request_parts(&mut parts, &state()).await
    }

    #[tokio::test]
    async fn test_valid_token() {
        assert!(extract(Some("Bearer s3cret")).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_header_is_forbidden() {
        let err = extract(None).await.unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.response.error, DENIED_MESSAGE);
    }

    #[tokio::test]
    async fn test_wrong_token_is_forbidden() {
        let err = extract(Some("Bearer nope")).await.unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.response.error, DENIED_MESSAGE);
    }
}
