//! The transition function: one action in, one new state out.

use crate::error::TableError;
use crate::model::Record;
use crate::projection::project_rows;
use crate::selection;
use crate::sort;

use super::Action;
use super::TableEvent;
use super::TableState;

/// The outcome of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The new state.
    pub state: TableState,
    /// Notification caused by the transition, if any.
    pub event: Option<TableEvent>,
}

impl Transition {
    fn unchanged(state: &TableState) -> Self {
        Self {
            state: state.clone(),
            event: None,
        }
    }

    /// Wraps `next`, noting a page change relative to `prev`.
    fn paged(prev: &TableState, next: TableState) -> Self {
        let event = (next.pagination.page != prev.pagination.page).then(|| TableEvent::PageChanged {
            page: next.pagination.page,
            per_page: next.pagination.per_page,
        });
        Self { state: next, event }
    }
}

/// Apply `action` to `state`.
///
/// The only failure is a sort on an undeclared column; `state` is left as
/// it was.
pub fn reduce(state: &TableState, action: Action) -> Result<Transition, TableError> {
    log::debug!("Table action {}", action.kind());
    match action {
        Action::SetRows(data) => Ok(set_rows(state, &data)),
        Action::ToggleSort { column, descending } => toggle_sort(state, &column, descending),
        Action::SelectRow(id) => Ok(select_row(state, id)),
        Action::ToggleAll => Ok(toggle_all(state)),
        Action::NextPage => Ok(next_page(state)),
        Action::PrevPage => Ok(prev_page(state)),
    }
}

/// Replace the data set.
///
/// Rows are rebuilt from `data` with fresh ids and no selection. An active
/// sort is reapplied before the current page is sliced.
pub fn set_rows(state: &TableState, data: &[Record]) -> Transition {
    let mut next = state.with_original_rows(project_rows(data, &state.registry));
    next.reorder();
    Transition::paged(state, next.derived())
}

/// Sort by `column`.
///
/// Unsortable columns leave the state as it is. With externally driven
/// sorting only the sort flags move; the row order stays the caller's.
pub fn toggle_sort(
    state: &TableState,
    column: &str,
    descending: Option<bool>,
) -> Result<Transition, TableError> {
    if !state.registry.contains(column) {
        log::warn!("Invalid column, {} not found", column);
        return Err(TableError::invalid_column(column));
    }

    let Some(toggle) = sort::toggle(state.registry.columns(), column, descending) else {
        log::debug!("Column '{}' is not sortable", column);
        return Ok(Transition::unchanged(state));
    };

    let mut next = state.clone();
    next.registry = state.registry.with_columns(toggle.columns);
    next.sort_column = Some(column.to_string());
    next.sort_by = Some(toggle.sort_by.clone());
    next.reorder();

    Ok(Transition {
        state: next.derived(),
        event: Some(TableEvent::SortChanged(toggle.sort_by)),
    })
}

/// Flip the selection of row `id`.
pub fn select_row(state: &TableState, id: usize) -> Transition {
    let mut next = state.clone();
    if !selection::toggle_row(&mut next.original_rows, id) {
        log::debug!("No row with id {}", id);
        return Transition::unchanged(state);
    }
    Transition {
        state: next.derived(),
        event: None,
    }
}

/// Select every visible row, or deselect them all if they already are.
pub fn toggle_all(state: &TableState) -> Transition {
    let mut next = state.clone();
    selection::toggle_visible(&mut next.original_rows, &next.rows);
    Transition {
        state: next.derived(),
        event: None,
    }
}

/// Advance one page unless already on the last one.
pub fn next_page(state: &TableState) -> Transition {
    match state.pagination.next_page() {
        Some(page) => turn_page(state, page),
        None => Transition::unchanged(state),
    }
}

/// Go back one page unless already on page 0.
pub fn prev_page(state: &TableState) -> Transition {
    match state.pagination.prev_page() {
        Some(page) => turn_page(state, page),
        None => Transition::unchanged(state),
    }
}

fn turn_page(state: &TableState, page: usize) -> Transition {
    let mut next = state.clone();
    next.pagination.page = page;
    Transition::paged(state, next.derived())
}
