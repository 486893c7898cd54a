//! JSON table configuration: column specs plus options.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::Table;
use crate::column::Column;
use crate::column::Comparator;
use crate::error::ConfigError;
use crate::model::Record;
use crate::options::TableOptions;
use crate::sort::compare;

/// How a configured column compares rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CompareSpec {
    /// Case-insensitive text (the default for sortable columns).
    Text,
    /// Numeric.
    Number,
    /// Dates parsed with a chrono format string.
    Date { format: String },
}

/// A column as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub sortable: Option<bool>,
    #[serde(default)]
    pub compare: Option<CompareSpec>,
    /// Cell template; `{value}` is replaced with the cell value.
    #[serde(default)]
    pub template: Option<String>,
}

impl ColumnSpec {
    /// Build the column declaration.
    pub fn to_column(&self) -> Column {
        let mut column = Column::new(&self.name);
        column.label = self.label.clone();
        column.hidden = self.hidden;
        column.default_can_sort = self.sortable;
        column.sort = match &self.compare {
            None | Some(CompareSpec::Text) => None,
            Some(CompareSpec::Number) => Some(Arc::new(compare::numeric(&self.name)) as Comparator),
            Some(CompareSpec::Date { format }) => Some(Arc::new(compare::date(&self.name, format)) as Comparator),
        };
        if let Some(template) = &self.template {
            let template = template.clone();
            column = column.render(move |cx| template.replace("{value}", &cx.value.to_string()));
        }
        column
    }
}

/// A table described in a config file.
///
/// # Example
///
/// ```
/// use tabula_lib::config::TableConfig;
///
/// let config = TableConfig::from_json(r#"{
///     "columns": [
///         {"name": "id", "hidden": true},
///         {"name": "customer", "label": "Customer"},
///         {"name": "due", "compare": {"kind": "date", "format": "%Y-%m-%d"}}
///     ],
///     "options": {"per_page": 5}
/// }"#).unwrap();
///
/// assert_eq!(config.columns().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub options: TableOptions,
}

impl TableConfig {
    /// Parse a config from JSON text.
    ///
    /// Options are validated when a table is built, so a manual pagination
    /// config may leave its page descriptor to be filled in later.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded table config from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// The column declarations.
    pub fn columns(&self) -> Vec<Column> {
        self.columns.iter().map(ColumnSpec::to_column).collect()
    }

    /// Build a table over `data`.
    pub fn table(&self, data: Vec<Record>) -> Result<Table, ConfigError> {
        Ok(Table::new(self.columns(), data, self.options.clone())?)
    }
}
