//! Sort engine: single-column sort resolution and ordering.

pub mod compare;

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnState;
use crate::column::Comparator;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Direction from a "descending" flag.
    pub fn from_desc(desc: bool) -> Self {
        if desc { Direction::Desc } else { Direction::Asc }
    }
}

/// The presentation-facing shape of the active sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    /// The sorted column name.
    pub id: String,
    /// Whether the sort is descending.
    pub desc: bool,
}

impl SortBy {
    pub fn new(id: impl Into<String>, desc: bool) -> Self {
        Self { id: id.into(), desc }
    }

    pub fn direction(&self) -> Direction {
        Direction::from_desc(self.desc)
    }

    /// `"ASC"` or `"DESC"`, as list endpoints take it.
    pub fn direction_param(&self) -> &'static str {
        match self.direction() {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Result of toggling the sort on a sortable column.
#[derive(Debug, Clone)]
pub struct SortToggle {
    /// All columns, with only the toggled one flagged as sorted.
    pub columns: Vec<ColumnState>,
    pub sort_by: SortBy,
}

/// Resolve the next sort state for `name`.
///
/// Returns `None` if the column is unknown or cannot be sorted. A forced
/// direction wins; otherwise the first toggle sorts ascending and each
/// further toggle of the same column flips the direction.
pub fn toggle(columns: &[ColumnState], name: &str, force_desc: Option<bool>) -> Option<SortToggle> {
    let target = columns.iter().find(|c| c.name == name && c.can_sort)?;

    let desc = match force_desc {
        Some(desc) => desc,
        None => target.is_sorted_desc == Some(false),
    };

    let columns = columns
        .iter()
        .map(|c| if c.name == name { c.sorted(desc) } else { c.unsorted() })
        .collect();

    Some(SortToggle {
        columns,
        sort_by: SortBy::new(name, desc),
    })
}

/// The comparator a column sorts with.
pub fn comparator(column: &ColumnState) -> Comparator {
    match &column.sort {
        Some(sort) => sort.clone(),
        None => Arc::new(compare::text_ascending(&column.name)),
    }
}

/// Display order of `rows` (positions into the slice) under the active sort.
///
/// Without an active sort column, or when that column no longer carries sort
/// flags, the order is the rows' own order. The sort is stable.
pub fn ordering(rows: &[Row], columns: &[ColumnState], sort_column: Option<&str>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let active = sort_column.and_then(|name| columns.iter().find(|c| c.name == name && c.is_sorted));
    let Some(column) = active else {
        return order;
    };

    let compare = comparator(column);
    let direction = Direction::from_desc(column.is_sorted_desc == Some(true));
    order.sort_by(|&a, &b| {
        let result = compare(&rows[a], &rows[b]);
        match direction {
            Direction::Asc => result,
            Direction::Desc => result.reverse(),
        }
    });
    order
}
