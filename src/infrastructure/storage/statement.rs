//! Parameterized SQL statements
//!
//! Values supplied by clients are only ever carried as [`SqlParam`]s and bound
//! by the driver; the SQL text itself is assembled from static fragments and
//! `$n` placeholders.

/// A positional parameter bound to a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    BigInt(i64),
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

/// SQL template with `$n` placeholders and its ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlParam>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter for a placeholder already present in the SQL
    pub fn bind(mut self, param: impl Into<SqlParam>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Append a parameter and return the placeholder that refers to it
    pub fn push_param(&mut self, param: impl Into<SqlParam>) -> String {
        self.params.push(param.into());
        format!("${}", self.params.len())
    }

    pub fn push_sql(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_appends_in_order() {
        let statement = Statement::new("SELECT * FROM t WHERE a = $1 AND b = $2")
            .bind("x")
            .bind(3_i64);

        assert_eq!(
            statement.params(),
            &[SqlParam::Text("x".to_string()), SqlParam::BigInt(3)]
        );
    }

    #[test]
    fn test_push_param_numbers_placeholders() {
        let mut statement = Statement::new("SELECT * FROM t WHERE 1=1");

        let first = statement.push_param("a");
        statement.push_sql(&format!(" AND a = {}", first));
        let second = statement.push_param("b");
        statement.push_sql(&format!(" AND b = {}", second));

        assert_eq!(first, "$1");
        assert_eq!(second, "$2");
        assert_eq!(statement.sql(), "SELECT * FROM t WHERE 1=1 AND a = $1 AND b = $2");
    }

    #[test]
    fn test_param_values_never_enter_sql() {
        let mut statement = Statement::new("SELECT 1 WHERE 1=1");
        let placeholder = statement.push_param("'; DROP TABLE usuarios; --");
        statement.push_sql(&format!(" AND x = {}", placeholder));

        assert!(!statement.sql().contains("DROP"));
    }
}
