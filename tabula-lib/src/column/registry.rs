//! Column registry: normalized column state plus a name lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::CellRender;
use crate::error::TableError;
use super::Column;
use super::ColumnState;

/// The part of a column that projection needs, looked up by name.
#[derive(Clone)]
pub struct ColumnEntry {
    pub label: String,
    pub render: Option<CellRender>,
    pub hidden: bool,
}

/// Normalized columns in declaration order, with a name-indexed lookup.
///
/// The lookup never changes after [`ColumnRegistry::build`]; only the sort
/// flags on the column states do, and those are replaced through
/// [`ColumnRegistry::with_columns`].
#[derive(Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnState>,
    by_name: Arc<HashMap<String, ColumnEntry>>,
}

impl ColumnRegistry {
    /// Normalize declarations, applying defaults.
    ///
    /// Column names key the lookup and the sort flags, so a repeated name is
    /// rejected.
    pub fn build(declarations: &[Column]) -> Result<Self, TableError> {
        let columns: Vec<ColumnState> = declarations
            .iter()
            .map(ColumnState::from_declaration)
            .collect();

        let mut by_name = HashMap::with_capacity(columns.len());
        for column in &columns {
            let entry = ColumnEntry {
                label: column.label.clone(),
                render: column.render.clone(),
                hidden: column.hidden,
            };
            if by_name.insert(column.name.clone(), entry).is_some() {
                log::warn!("Duplicate column '{}'", column.name);
                return Err(TableError::invalid_configuration(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
        }

        Ok(Self {
            columns,
            by_name: Arc::new(by_name),
        })
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    /// Column state by name.
    pub fn column(&self, name: &str) -> Option<&ColumnState> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Lookup entry by name.
    pub fn get(&self, name: &str) -> Option<&ColumnEntry> {
        self.by_name.get(name)
    }

    /// Whether `name` is a declared column.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Declared column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Same lookup, new column states.
    pub fn with_columns(&self, columns: Vec<ColumnState>) -> Self {
        Self {
            columns,
            by_name: Arc::clone(&self.by_name),
        }
    }
}

impl std::fmt::Debug for ColumnRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnRegistry")
            .field("columns", &self.columns)
            .finish()
    }
}
