//! Shared-secret bearer token gate

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::DomainError;

/// Message returned for every rejected credential
pub const DENIED_MESSAGE: &str = "Token inválido o faltante";

const BEARER_PREFIX: &str = "Bearer ";

/// Admits or rejects requests based on a single process-wide secret
///
/// Missing header, malformed header and wrong token all produce the same
/// rejection. When no secret is configured every request is rejected.
#[derive(Clone)]
pub struct TokenGate {
    secret_digest: Option<[u8; 32]>,
}

impl std::fmt::Debug for TokenGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl TokenGate {
    /// Create a gate for the given secret; an empty secret denies all requests
    pub fn new(secret: impl AsRef<str>) -> Self {
        let secret = secret.as_ref();

        let secret_digest = if secret.is_empty() {
            None
        } else {
            Some(digest(secret))
        };

        Self { secret_digest }
    }

    pub fn is_configured(&self) -> bool {
        self.secret_digest.is_some()
    }

    /// Check the raw `Authorization` header value
    pub fn authorize(&self, header: Option<&str>) -> Result<(), DomainError> {
        let Some(expected) = &self.secret_digest else {
            debug!("Rejecting request: no token configured");
            return Err(DomainError::unauthorized(DENIED_MESSAGE));
        };

        let Some(token) = header.and_then(|value| value.strip_prefix(BEARER_PREFIX)) else {
            debug!("Rejecting request: missing or malformed authorization header");
            return Err(DomainError::unauthorized(DENIED_MESSAGE));
        };

        if !constant_time_compare(&digest(token), expected) {
            debug!("Rejecting request: token mismatch");
            return Err(DomainError::unauthorized(DENIED_MESSAGE));
        }

        Ok(())
    }
}

fn digest(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

/// Constant-time comparison of two digests
fn constant_time_compare(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let mut result = 0u8;

    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
