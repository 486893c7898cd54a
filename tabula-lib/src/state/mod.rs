//! Table state and the transition engine.

mod action;
pub mod reducer;

pub use action::*;
pub use reducer::Transition;
pub use reducer::reduce;

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::column::ColumnState;
use crate::error::TableError;
use crate::model::Record;
use crate::model::Row;
use crate::options::Mode;
use crate::options::PaginationMode;
use crate::options::TableMode;
use crate::pagination::PageDescriptor;
use crate::pagination::Pagination;
use crate::pagination::page_slice;
use crate::projection::project_rows;
use crate::selection;
use crate::sort;
use crate::sort::SortBy;

/// The aggregate state of one table.
///
/// A state is never changed in place: every transition
/// builds a new one. Everything except `original_rows`, the sort flags, the
/// selection flags and the page index is derived from those.
#[derive(Debug, Clone)]
pub struct TableState {
    registry: ColumnRegistry,
    /// Full row set in id order.
    original_rows: Vec<Row>,
    /// Display order of `original_rows` (positions), sort applied.
    order: Vec<usize>,
    /// Visible slice.
    rows: Vec<Row>,
    selected_rows: Vec<Row>,
    sort_column: Option<String>,
    sort_by: Option<SortBy>,
    mode: TableMode,
    pagination: Pagination,
    toggle_all_state: bool,
    can_next: bool,
    can_prev: bool,
}

impl TableState {
    /// Create a fresh state from column declarations and data.
    ///
    /// Fails if two columns share a name.
    pub fn new(columns: &[Column], data: &[Record], mode: TableMode) -> Result<Self, TableError> {
        let registry = ColumnRegistry::build(columns)?;
        let original_rows = project_rows(data, &registry);
        let pagination = match &mode.pagination {
            PaginationMode::SelfManaged { per_page, rounding } => {
                Pagination::self_managed(original_rows.len(), *per_page, *rounding)
            }
            PaginationMode::ExternallyDriven(page) => Pagination::from_descriptor(page),
        };

        let state = Self {
            order: (0..original_rows.len()).collect(),
            registry,
            original_rows,
            rows: Vec::new(),
            selected_rows: Vec::new(),
            sort_column: None,
            sort_by: None,
            mode,
            pagination,
            toggle_all_state: false,
            can_next: false,
            can_prev: false,
        };
        Ok(state.derived())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All columns, hidden ones included.
    pub fn columns(&self) -> &[ColumnState] {
        self.registry.columns()
    }

    /// The visible rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The full row set, in id order.
    pub fn original_rows(&self) -> &[Row] {
        &self.original_rows
    }

    /// Selected rows of the full set, in id order.
    pub fn selected_rows(&self) -> &[Row] {
        &self.selected_rows
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_by(&self) -> Option<&SortBy> {
        self.sort_by.as_ref()
    }

    /// Whether the engine orders the rows itself.
    pub fn sort_enabled(&self) -> bool {
        self.mode.sort == Mode::SelfManaged
    }

    /// Whether the engine slices pages itself.
    pub fn pagination_enabled(&self) -> bool {
        matches!(self.mode.pagination, PaginationMode::SelfManaged { .. })
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Whether every visible row is selected.
    pub fn toggle_all_state(&self) -> bool {
        self.toggle_all_state
    }

    pub fn can_next(&self) -> bool {
        self.can_next
    }

    pub fn can_prev(&self) -> bool {
        self.can_prev
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// A copy carrying the totals of a new caller page descriptor.
    ///
    /// Only meaningful for externally driven pagination; a self-managed
    /// paginator owns its totals and ignores the descriptor.
    pub fn with_page_totals(&self, page: &PageDescriptor) -> Self {
        let mut next = self.clone();
        match next.mode.pagination {
            PaginationMode::ExternallyDriven(_) => {
                next.pagination.total_items = page.count;
                next.pagination.total_pages = page.total_pages;
            }
            PaginationMode::SelfManaged { .. } => {
                log::debug!("Ignoring page descriptor, pagination is self-managed");
            }
        }
        next.derived()
    }

    /// A copy with a new full row set and every other field carried over.
    fn with_original_rows(&self, original_rows: Vec<Row>) -> Self {
        Self {
            registry: self.registry.clone(),
            original_rows,
            order: Vec::new(),
            rows: Vec::new(),
            selected_rows: Vec::new(),
            sort_column: self.sort_column.clone(),
            sort_by: self.sort_by.clone(),
            mode: self.mode,
            pagination: self.pagination,
            toggle_all_state: false,
            can_next: false,
            can_prev: false,
        }
    }

    /// Recompute the display order from `original_rows`.
    fn reorder(&mut self) {
        self.order = match self.mode.sort {
            Mode::SelfManaged => sort::ordering(
                &self.original_rows,
                self.registry.columns(),
                self.sort_column.as_deref(),
            ),
            Mode::ExternallyDriven => (0..self.original_rows.len()).collect(),
        };
    }

    /// Recompute page totals, the visible slice and the selection summary.
    fn derived(mut self) -> Self {
        if let PaginationMode::SelfManaged { per_page, rounding } = self.mode.pagination {
            let items = self.original_rows.len();
            self.pagination.per_page = per_page;
            self.pagination.total_items = items;
            self.pagination.total_pages = rounding.total_pages(items, per_page);
            self.pagination.page = self.pagination.page.min(self.pagination.last_filled_page());
        }

        let visible: &[usize] = match self.mode.pagination {
            PaginationMode::SelfManaged { per_page, .. } => {
                page_slice(&self.order, per_page, self.pagination.page)
            }
            PaginationMode::ExternallyDriven(_) => &self.order,
        };
        self.rows = visible
            .iter()
            .filter_map(|&i| self.original_rows.get(i).cloned())
            .collect();

        self.selected_rows = selection::selected_rows(&self.original_rows);
        self.toggle_all_state = selection::all_selected(&self.rows);
        self.can_prev = self.pagination.can_prev();
        self.can_next = self.pagination.can_next();

        log::trace!(
            "Derived view: {} of {} rows visible, page {}, {} selected",
            self.rows.len(),
            self.original_rows.len(),
            self.pagination.page,
            self.selected_rows.len()
        );
        self
    }
}
