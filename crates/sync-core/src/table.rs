//! Table references and the identifier resolver.

use std::fmt;

/// Error returned when a table identifier cannot be qualified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("table {table} ignored: no namespace available")]
pub struct ResolutionError {
    /// The identifier as supplied by the user
    pub table: String,
}

/// A fully-qualified table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    /// Namespace (PostgreSQL schema) the table lives in
    pub namespace: String,
    /// Table name within the namespace
    pub name: String,
}

impl TableRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Resolve a user-supplied table identifier into a [`TableRef`].
///
/// A qualified identifier (`namespace.table`) is split on its first `.`,
/// whatever the default namespace. A bare identifier falls back to
/// `default_namespace` and fails when none is configured.
pub fn resolve_table(
    raw: &str,
    default_namespace: Option<&str>,
) -> Result<TableRef, ResolutionError> {
    if let Some((namespace, name)) = raw.split_once('.') {
        return Ok(TableRef::new(namespace, name));
    }

    match default_namespace {
        Some(namespace) => Ok(TableRef::new(namespace, raw)),
        None => Err(ResolutionError {
            table: raw.to_string(),
        }),
    }
}
