//! SQL statements for the `usuarios` table

use crate::domain::{SearchField, UsuarioFields, UsuarioFilter, UsuarioId};
use crate::infrastructure::storage::Statement;

const SELECT_COLUMNS: &str = r#"SELECT id, nombre, "teléfono", correo, profesional, mensaje, disponibilidad, tarifa, ciudad FROM usuarios"#;

pub fn select_all() -> Statement {
    Statement::new(format!("{} ORDER BY id", SELECT_COLUMNS))
}

pub fn select_by_id(id: UsuarioId) -> Statement {
    Statement::new(format!("{} WHERE id = $1", SELECT_COLUMNS)).bind(id.value())
}

/// Build the search statement
///
/// Starts from an always-true predicate and appends one case-insensitive
/// `ILIKE` clause per active filter, so an empty filter selects everything.
pub fn search(filter: &UsuarioFilter) -> Statement {
    let mut statement = Statement::new(format!("{} WHERE 1=1", SELECT_COLUMNS));

    for (field, value) in filter.criteria() {
        let placeholder = statement.push_param(like_pattern(value));
        statement.push_sql(&format!(" AND {} ILIKE {}", column(field), placeholder));
    }

    statement.push_sql(" ORDER BY id");
    statement
}

pub fn insert(fields: &UsuarioFields) -> Statement {
    Statement::new(
        r#"INSERT INTO usuarios (nombre, "teléfono", correo, profesional, mensaje, disponibilidad, tarifa, ciudad)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id"#,
    )
    .bind(fields.nombre.as_str())
    .bind(fields.telefono.as_str())
    .bind(fields.correo.as_str())
    .bind(fields.profesional.as_str())
    .bind(fields.mensaje.as_str())
    .bind(fields.disponibilidad.as_str())
    .bind(fields.tarifa.as_str())
    .bind(fields.ciudad.as_str())
}

pub fn update(id: UsuarioId, fields: &UsuarioFields) -> Statement {
    Statement::new(
        r#"UPDATE usuarios
        SET nombre = $1, "teléfono" = $2, correo = $3, profesional = $4, mensaje = $5,
            disponibilidad = $6, tarifa = $7, ciudad = $8
        WHERE id = $9"#,
    )
    .bind(fields.nombre.as_str())
    .bind(fields.telefono.as_str())
    .bind(fields.correo.as_str())
    .bind(fields.profesional.as_str())
    .bind(fields.mensaje.as_str())
    .bind(fields.disponibilidad.as_str())
    .bind(fields.tarifa.as_str())
    .bind(fields.ciudad.as_str())
    .bind(id.value())
}

pub fn delete(id: UsuarioId) -> Statement {
    Statement::new("DELETE FROM usuarios WHERE id = $1").bind(id.value())
}

fn column(field: SearchField) -> &'static str {
    match field {
        SearchField::Nombre => "nombre",
        SearchField::Correo => "correo",
        SearchField::Profesional => "profesional",
    }
}

/// Wrap a filter value in `%` wildcards, escaping LIKE metacharacters so the
/// value matches literally
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::SqlParam;

    fn sample_fields() -> UsuarioFields {
        UsuarioFields {
            nombre: "Juan Pérez".to_string(),
            telefono: "600123456".to_string(),
            correo: "juan.perez@gmail.com".to_string(),
            profesional: "electricista".to_string(),
            mensaje: "Instalar enchufes en la cocina".to_string(),
            disponibilidad: "tardes".to_string(),
            tarifa: "25".to_string(),
            ciudad: "Sevilla".to_string(),
        }
    }

    #[test]
    fn test_search_without_filters_selects_everything() {
        let statement = search(&UsuarioFilter::new());

        assert!(statement.sql().ends_with("WHERE 1=1 ORDER BY id"));
        assert!(statement.params().is_empty());
    }

    #[test]
    fn test_search_with_one_filter() {
        let statement = search(&UsuarioFilter::new().with_profesional("electric"));

        assert!(statement.sql().contains("WHERE 1=1 AND profesional ILIKE $1 ORDER BY id"));
        assert_eq!(statement.params(), &[SqlParam::Text("%electric%".to_string())]);
    }

    #[test]
    fn test_search_with_all_filters() {
        let filter = UsuarioFilter::new()
            .with_nombre("ana")
            .with_correo("gmail")
            .with_profesional("pintor");
        let statement = search(&filter);

        assert!(statement.sql().contains(
            "AND nombre ILIKE $1 AND correo ILIKE $2 AND profesional ILIKE $3"
        ));
        assert_eq!(statement.params().len(), 3);
    }

    #[test]
    fn test_search_skips_empty_filters() {
        let filter = UsuarioFilter::new().with_nombre("").with_correo("x");
        let statement = search(&filter);

        assert!(!statement.sql().contains("nombre ILIKE"));
        assert!(statement.sql().contains("correo ILIKE $1"));
    }

    #[test]
    fn test_search_value_is_bound_not_interpolated() {
        let statement = search(&UsuarioFilter::new().with_nombre("x' OR '1'='1"));

        assert!(!statement.sql().contains("OR '1'='1"));
        assert_eq!(
            statement.params(),
            &[SqlParam::Text("%x' OR '1'='1%".to_string())]
        );
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
        assert_eq!(like_pattern("pintor"), "%pintor%");
    }

    #[test]
    fn test_insert_binds_all_fields() {
        let statement = insert(&sample_fields());

        assert!(statement.sql().contains("RETURNING id"));
        assert_eq!(statement.params().len(), 8);
        assert_eq!(
            statement.params()[1],
            SqlParam::Text("600123456".to_string())
        );
    }

    #[test]
    fn test_update_binds_id_last() {
        let statement = update(UsuarioId::new(9), &sample_fields());

        assert_eq!(statement.params().len(), 9);
        assert_eq!(statement.params()[8], SqlParam::BigInt(9));
        assert!(statement.sql().contains("WHERE id = $9"));
    }

    #[test]
    fn test_select_and_delete_by_id() {
        let select = select_by_id(UsuarioId::new(3));
        let remove = delete(UsuarioId::new(3));

        assert_eq!(select.params(), &[SqlParam::BigInt(3)]);
        assert_eq!(remove.params(), &[SqlParam::BigInt(3)]);
        assert_eq!(remove.sql(), "DELETE FROM usuarios WHERE id = $1");
    }
}
