//! Column declarations and the column registry.

mod registry;

pub use registry::*;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Row;
use crate::model::Value;

/// Compares two presented rows.
///
/// Custom comparators must be deterministic: the same pair of rows must
/// always compare the same way. Sorting is stable only under that condition.
pub type Comparator = Arc<dyn Fn(&Row, &Row) -> Ordering + Send + Sync>;

/// Renders the content of one cell.
pub type CellRender = Arc<dyn Fn(&CellContext<'_>) -> String + Send + Sync>;

/// Renders the content of one header from its label.
pub type HeaderRender = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// What a [`CellRender`] hook gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// The cell's raw value.
    pub value: &'a Value,
    /// The whole projected record the cell belongs to.
    pub row: &'a Record,
    /// The column name.
    pub column: &'a str,
}

/// A caller-supplied column declaration.
///
/// Only `name` is required; everything else takes a default when the
/// registry normalizes it into [`ColumnState`].
///
/// # Examples
///
/// ```
/// use tabula_lib::column::Column;
/// use tabula_lib::sort::compare;
///
/// let columns = vec![
///     Column::new("id").hidden(),
///     Column::new("customer").label("Customer"),
///     Column::new("due").label("Due").sort_by(compare::date("due", "%Y-%m-%d")),
///     Column::new("notes").sortable(false),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Key into each record. Must be unique among the declared columns.
    pub name: String,
    /// Header text; defaults to `name`.
    pub label: Option<String>,
    /// Hidden columns produce no cells and no header.
    pub hidden: bool,
    /// Whether the column can be sorted; defaults to `true`.
    pub default_can_sort: Option<bool>,
    /// Custom comparator.
    pub sort: Option<Comparator>,
    /// Custom cell render hook.
    pub render: Option<CellRender>,
    /// Custom header render hook.
    pub header_render: Option<HeaderRender>,
}

impl Column {
    /// Create a new column keyed by `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            hidden: false,
            default_can_sort: None,
            sort: None,
            render: None,
            header_render: None,
        }
    }

    /// Set the header label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Hide the column.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set whether the column can be sorted.
    pub fn sortable(mut self, can_sort: bool) -> Self {
        self.default_can_sort = Some(can_sort);
        self
    }

    /// Use a custom comparator instead of the default text comparison.
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Row, &Row) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(compare));
        self
    }

    /// Use a custom cell render hook.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellContext<'_>) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Use a custom header render hook.
    pub fn header_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header_render = Some(Arc::new(render));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("hidden", &self.hidden)
            .field("default_can_sort", &self.default_can_sort)
            .field("sort", &self.sort.is_some())
            .field("render", &self.render.is_some())
            .field("header_render", &self.header_render.is_some())
            .finish()
    }
}

/// Runtime column metadata, including its part in the active sort.
#[derive(Clone)]
pub struct ColumnState {
    pub name: String,
    pub label: String,
    pub hidden: bool,
    pub can_sort: bool,
    /// `true` for the single column the rows are sorted by.
    pub is_sorted: bool,
    /// `None` while unsorted, then `Some(false)` ascending / `Some(true)` descending.
    pub is_sorted_desc: Option<bool>,
    pub sort: Option<Comparator>,
    pub render: Option<CellRender>,
    pub header_render: Option<HeaderRender>,
}

impl ColumnState {
    /// Apply the defaults to a declaration.
    pub fn from_declaration(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            label: column.label.clone().unwrap_or_else(|| column.name.clone()),
            hidden: column.hidden,
            can_sort: column.default_can_sort.unwrap_or(true),
            is_sorted: false,
            is_sorted_desc: None,
            sort: column.sort.clone(),
            render: column.render.clone(),
            header_render: column.header_render.clone(),
        }
    }

    /// Copy of this column with its sort flags cleared.
    pub fn unsorted(&self) -> Self {
        Self {
            is_sorted: false,
            is_sorted_desc: None,
            ..self.clone()
        }
    }

    /// Copy of this column marked as the active sort column.
    pub fn sorted(&self, descending: bool) -> Self {
        Self {
            is_sorted: true,
            is_sorted_desc: Some(descending),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ColumnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnState")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("hidden", &self.hidden)
            .field("can_sort", &self.can_sort)
            .field("is_sorted", &self.is_sorted)
            .field("is_sorted_desc", &self.is_sorted_desc)
            .field("sort", &self.sort.is_some())
            .finish_non_exhaustive()
    }
}
