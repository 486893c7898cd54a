//! Projected rows and cells

use serde::Serialize;

use super::Record;
use super::Value;

/// One presentable cell of a [`Row`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// The column name this cell belongs to.
    pub field: String,
    /// The raw value from the record.
    pub value: Value,
    /// Output of the column's render hook, or the value's display form.
    pub rendered: String,
}

impl Cell {
    /// Returns the rendered content of this cell.
    pub fn render(&self) -> &str {
        &self.rendered
    }
}

/// A projected, id-tagged unit of table data derived from one [`Record`].
///
/// The `id` is the position of the record in the data set the row was built
/// from. It is reassigned whenever the data is replaced, so it identifies a
/// row only within one data generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Zero-based position in the data set.
    pub id: usize,
    /// The raw record, filtered to the declared columns.
    pub original: Record,
    /// Cells in column order, hidden columns excluded.
    pub cells: Vec<Cell>,
    /// Whether the row is selected.
    pub selected: bool,
    /// Reserved for row-level visibility; always `false`.
    pub hidden: bool,
}

impl Row {
    /// Returns the original value of a field.
    pub fn value(&self, field: &str) -> &Value {
        self.original.value(field)
    }

    /// Returns the visible cell for a column, if any.
    pub fn cell(&self, field: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.field == field)
    }
}
