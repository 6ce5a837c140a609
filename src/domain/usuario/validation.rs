//! Usuario validation utilities

use thiserror::Error;

use super::entity::UsuarioFields;

/// Message returned to clients when a required field is missing
pub const MISSING_FIELDS_MESSAGE: &str = "Faltan campos obligatorios";

/// Errors that can occur during usuario validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UsuarioValidationError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields(Vec<&'static str>),
}

impl UsuarioValidationError {
    /// Names of the fields that were absent, null or empty
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields(fields) => fields,
        }
    }
}

/// Unvalidated usuario input, as received from a create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsuarioDraft {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub profesional: Option<String>,
    pub mensaje: Option<String>,
    pub disponibilidad: Option<String>,
    pub tarifa: Option<String>,
    pub ciudad: Option<String>,
}

/// Validate a draft into a complete set of usuario fields
///
/// Rules:
/// - All eight fields are required
/// - An empty string counts as missing
/// - No format checks are applied (email, phone and rate are free text)
pub fn validate_usuario(draft: UsuarioDraft) -> Result<UsuarioFields, UsuarioValidationError> {
    let mut missing = Vec::new();

    let nombre = require(draft.nombre, "nombre", &mut missing);
    let telefono = require(draft.telefono, "teléfono", &mut missing);
    let correo = require(draft.correo, "correo", &mut missing);
    let profesional = require(draft.profesional, "profesional", &mut missing);
    let mensaje = require(draft.mensaje, "mensaje", &mut missing);
    let disponibilidad = require(draft.disponibilidad, "disponibilidad", &mut missing);
    let tarifa = require(draft.tarifa, "tarifa", &mut missing);
    let ciudad = require(draft.ciudad, "ciudad", &mut missing);

    if !missing.is_empty() {
        return Err(UsuarioValidationError::MissingFields(missing));
    }

    Ok(UsuarioFields {
        nombre,
        telefono,
        correo,
        profesional,
        mensaje,
        disponibilidad,
        tarifa,
        ciudad,
    })
}

fn require(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> UsuarioDraft {
        UsuarioDraft {
            nombre: Some("Ana".to_string()),
            telefono: Some("123".to_string()),
            correo: Some("a@b.com".to_string()),
            profesional: Some("electricista".to_string()),
            mensaje: Some("fix".to_string()),
            disponibilidad: Some("AM".to_string()),
            tarifa: Some("10".to_string()),
            ciudad: Some("X".to_string()),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        let fields = validate_usuario(complete_draft()).unwrap();
        assert_eq!(fields.nombre, "Ana");
        assert_eq!(fields.telefono, "123");
        assert_eq!(fields.ciudad, "X");
    }

    #[test]
    fn test_each_absent_field_is_rejected() {
        let clears: [(&str, fn(&mut UsuarioDraft)); 8] = [
            ("nombre", |d| d.nombre = None),
            ("teléfono", |d| d.telefono = None),
            ("correo", |d| d.correo = None),
            ("profesional", |d| d.profesional = None),
            ("mensaje", |d| d.mensaje = None),
            ("disponibilidad", |d| d.disponibilidad = None),
            ("tarifa", |d| d.tarifa = None),
            ("ciudad", |d| d.ciudad = None),
        ];

        for (name, clear) in clears {
            let mut draft = complete_draft();
            clear(&mut draft);

            let err = validate_usuario(draft).unwrap_err();
            assert_eq!(err.missing_fields(), &[name]);
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut draft = complete_draft();
        draft.correo = Some(String::new());

        let err = validate_usuario(draft).unwrap_err();
        assert_eq!(err.missing_fields(), &["correo"]);
    }

    #[test]
    fn test_whitespace_is_accepted() {
        let mut draft = complete_draft();
        draft.mensaje = Some(" ".to_string());

        assert!(validate_usuario(draft).is_ok());
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let err = validate_usuario(UsuarioDraft::default()).unwrap_err();
        assert_eq!(err.missing_fields().len(), 8);
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_no_format_validation() {
        let mut draft = complete_draft();
        draft.correo = Some("not-an-email".to_string());
        draft.telefono = Some("call me".to_string());

        assert!(validate_usuario(draft).is_ok());
    }
}
