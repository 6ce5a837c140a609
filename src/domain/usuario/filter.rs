//! Search filters for usuarios
//!
//! Matching policy: a filter matches when the field contains the filter text
//! as a substring, ignoring case. Accented characters are compared as-is
//! (`"Pérez"` does not match `"perez"`). Absent and empty filters impose no
//! constraint.

/// Fields that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Nombre,
    Correo,
    Profesional,
}

impl SearchField {
    /// Value of this field on a usuario
    pub fn value_of(self, fields: &super::UsuarioFields) -> &str {
        match self {
            Self::Nombre => &fields.nombre,
            Self::Correo => &fields.correo,
            Self::Profesional => &fields.profesional,
        }
    }
}

/// Optional partial-match filters for usuario search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsuarioFilter {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub profesional: Option<String>,
}

impl UsuarioFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    pub fn with_correo(mut self, correo: impl Into<String>) -> Self {
        self.correo = Some(correo.into());
        self
    }

    pub fn with_profesional(mut self, profesional: impl Into<String>) -> Self {
        self.profesional = Some(profesional.into());
        self
    }

    /// Filters that constrain the result, in a fixed order
    pub fn criteria(&self) -> impl Iterator<Item = (SearchField, &str)> {
        [
            (SearchField::Nombre, self.nombre.as_deref()),
            (SearchField::Correo, self.correo.as_deref()),
            (SearchField::Profesional, self.profesional.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value {
            Some(value) if !value.is_empty() => Some((field, value)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.criteria().next().is_none()
    }

    /// Whether a usuario satisfies every active filter
    pub fn matches(&self, fields: &super::UsuarioFields) -> bool {
        self.criteria()
            .all(|(field, needle)| contains_ignore_case(field.value_of(fields), needle))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
