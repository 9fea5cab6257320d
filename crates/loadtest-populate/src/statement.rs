//! INSERT statement construction.

use sync_core::{ColumnDescriptor, TableRef};

/// A parameterized INSERT with one positional parameter per column.
///
/// Parameter `$i` binds `columns[i - 1]`; the generator list built from the
/// same column slice lines up index for index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    /// Target table
    pub table: TableRef,
    /// Column names in parameter order
    pub columns: Vec<String>,
}

impl InsertStatement {
    pub fn new(table: TableRef, columns: &[ColumnDescriptor]) -> Self {
        Self {
            table,
            columns: columns.iter().map(|c| c.name.clone()).collect(),
        }
    }

    /// Number of positional parameters.
    pub fn parameter_count(&self) -> usize {
        self.columns.len()
    }

    /// Render the statement text.
    pub fn text(&self) -> String {
        let target = format!(
            "{}.{}",
            quote_identifier(&self.table.namespace),
            quote_identifier(&self.table.name)
        );

        if self.columns.is_empty() {
            return format!("INSERT INTO {target} DEFAULT VALUES");
        }

        let columns = self
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!("INSERT INTO {target} ({columns}) VALUES ({placeholders})")
    }
}

/// Double-quote an identifier, doubling any embedded quotes.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
