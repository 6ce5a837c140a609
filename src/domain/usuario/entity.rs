//! Usuario entity

use std::fmt;

/// Server-assigned identifier of a usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsuarioId(i64);

impl UsuarioId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse an identifier from a path segment
    ///
    /// Returns `None` for anything that is not a base-10 integer.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse::<i64>().ok().map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UsuarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight business fields of a usuario
///
/// Every field is required and non-empty once the record exists; instances
/// are only produced by [`validate_usuario`](super::validate_usuario) or read
/// back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsuarioFields {
    pub nombre: String,
    pub telefono: String,
    pub correo: String,
    pub profesional: String,
    pub mensaje: String,
    pub disponibilidad: String,
    pub tarifa: String,
    pub ciudad: String,
}

/// A stored usuario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    id: UsuarioId,
    fields: UsuarioFields,
}

impl Usuario {
    pub fn new(id: UsuarioId, fields: UsuarioFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> UsuarioId {
        self.id
    }

    pub fn fields(&self) -> &UsuarioFields {
        &self.fields
    }

    pub fn into_fields(self) -> UsuarioFields {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(UsuarioId::parse("42"), Some(UsuarioId::new(42)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(UsuarioId::parse("abc"), None);
        assert_eq!(UsuarioId::parse("4a"), None);
        assert_eq!(UsuarioId::parse(""), None);
        assert_eq!(UsuarioId::parse("1.5"), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UsuarioId::new(7).to_string(), "7");
    }
}
