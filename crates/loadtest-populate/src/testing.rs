//! In-memory database double for pipeline tests.

use crate::session::{LookupError, SchemaCatalog, Session};
use crate::statement::InsertStatement;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use sync_core::{ColumnDescriptor, TableRef, Value};

/// Records every prepare and execute; can be told to fail a table's
/// executes after a number of successful ones.
#[derive(Default)]
pub(crate) struct FakeDatabase {
    namespaces: HashSet<String>,
    tables: HashMap<TableRef, Vec<ColumnDescriptor>>,
    fail_after: Option<(TableRef, usize)>,
    prepare_failure: Option<(TableRef, String)>,
    lookups: Mutex<Vec<TableRef>>,
    prepared: Mutex<Vec<InsertStatement>>,
    executed: Mutex<Vec<(TableRef, Vec<Value>)>>,
}

impl FakeDatabase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespaces.insert(namespace.to_string());
        self
    }

    pub(crate) fn with_table(
        mut self,
        namespace: &str,
        name: &str,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        self.namespaces.insert(namespace.to_string());
        self.tables.insert(TableRef::new(namespace, name), columns);
        self
    }

    pub(crate) fn failing_after(mut self, table: TableRef, successes: usize) -> Self {
        self.fail_after = Some((table, successes));
        self
    }

    pub(crate) fn failing_prepare(mut self, table: TableRef, message: &str) -> Self {
        self.prepare_failure = Some((table, message.to_string()));
        self
    }

    pub(crate) fn columns(&self, table: &TableRef) -> Vec<ColumnDescriptor> {
        self.tables.get(table).cloned().unwrap_or_default()
    }

    pub(crate) fn lookups(&self) -> Vec<TableRef> {
        self.lookups.lock().unwrap().clone()
    }

    pub(crate) fn prepared(&self) -> Vec<InsertStatement> {
        self.prepared.lock().unwrap().clone()
    }

    pub(crate) fn executed(&self) -> Vec<(TableRef, Vec<Value>)> {
        self.executed.lock().unwrap().clone()
    }

    pub(crate) fn executed_for(&self, table: &TableRef) -> usize {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == table)
            .count()
    }
}

#[async_trait]
impl SchemaCatalog for FakeDatabase {
    async fn lookup_columns(
        &self,
        table: &TableRef,
    ) -> Result<Vec<ColumnDescriptor>, LookupError> {
        self.lookups.lock().unwrap().push(table.clone());

        if !self.namespaces.contains(&table.namespace) {
            return Err(LookupError::NamespaceNotFound {
                table: table.clone(),
                namespace: table.namespace.clone(),
            });
        }
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| LookupError::TableNotFound {
                table: table.clone(),
            })
    }
}

#[async_trait]
impl Session for FakeDatabase {
    type Statement = InsertStatement;

    async fn prepare(&self, insert: &InsertStatement) -> anyhow::Result<InsertStatement> {
        if !self.tables.contains_key(&insert.table) {
            anyhow::bail!("relation {} does not exist", insert.table);
        }
        if let Some((table, message)) = &self.prepare_failure {
            if *table == insert.table {
                anyhow::bail!("{message}");
            }
        }
        self.prepared.lock().unwrap().push(insert.clone());
        Ok(insert.clone())
    }

    async fn execute(&self, statement: &InsertStatement, values: &[Value]) -> anyhow::Result<()> {
        anyhow::ensure!(
            values.len() == statement.parameter_count(),
            "expected {} parameters, got {}",
            statement.parameter_count(),
            values.len()
        );

        if let Some((table, successes)) = &self.fail_after {
            if *table == statement.table && self.executed_for(table) >= *successes {
                anyhow::bail!("write timeout on {table}");
            }
        }

        self.executed
            .lock()
            .unwrap()
            .push((statement.table.clone(), values.to_vec()));
        Ok(())
    }
}
