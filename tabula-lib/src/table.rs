//! Public facade over the table state.

use crate::column::Column;
use crate::column::ColumnState;
use crate::column::HeaderRender;
use crate::error::TableError;
use crate::model::Record;
use crate::model::Row;
use crate::options::TableOptions;
use crate::pagination::PageDescriptor;
use crate::pagination::Pagination;
use crate::sort::SortBy;
use crate::state::Action;
use crate::state::TableEvent;
use crate::state::TableState;
use crate::state::Transition;
use crate::state::reduce;
use crate::state::reducer;

/// A visible column header, as handed to the presentation layer.
#[derive(Clone)]
pub struct Header {
    pub name: String,
    pub label: String,
    pub can_sort: bool,
    pub is_sorted: bool,
    pub is_sorted_desc: Option<bool>,
    header_render: Option<HeaderRender>,
}

impl Header {
    fn from_column(column: &ColumnState) -> Self {
        Self {
            name: column.name.clone(),
            label: column.label.clone(),
            can_sort: column.can_sort,
            is_sorted: column.is_sorted,
            is_sorted_desc: column.is_sorted_desc,
            header_render: column.header_render.clone(),
        }
    }

    /// The header content: the render hook's output, or the label.
    pub fn render(&self) -> String {
        match &self.header_render {
            Some(render) => render(&self.label),
            None => self.label.clone(),
        }
    }

    /// The action a click on this header dispatches. `None` if unsortable.
    pub fn on_click(&self) -> Option<Action> {
        self.can_sort.then(|| Action::toggle_sort(self.name.clone()))
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("can_sort", &self.can_sort)
            .field("is_sorted", &self.is_sorted)
            .field("is_sorted_desc", &self.is_sorted_desc)
            .finish_non_exhaustive()
    }
}

/// A table: column declarations, options, the current data and the state
/// derived from them.
///
/// `Table` only forwards to the transition engine and republishes the
/// resulting state. Notifications from transitions queue up until
/// [`Table::drain_events`] is called.
///
/// # Example
///
/// ```
/// use tabula_lib::Table;
/// use tabula_lib::column::Column;
/// use tabula_lib::model::Record;
/// use tabula_lib::options::TableOptions;
///
/// let columns = vec![Column::new("customer").label("Customer")];
/// let data = vec![
///     Record::new().set("customer", "Kwideo"),
///     Record::new().set("customer", "Feedmix"),
/// ];
///
/// let mut table = Table::new(columns, data, TableOptions::default()).unwrap();
/// table.toggle_sort("customer", None).unwrap();
///
/// assert_eq!(table.rows()[0].value("customer").as_str(), Some("Feedmix"));
/// assert_eq!(table.drain_events().len(), 1);
/// ```
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    options: TableOptions,
    data: Vec<Record>,
    state: TableState,
    events: Vec<TableEvent>,
}

impl Table {
    /// Create a table.
    ///
    /// Fails on options that do not resolve to a mode and on duplicate
    /// column names.
    pub fn new(columns: Vec<Column>, data: Vec<Record>, options: TableOptions) -> Result<Self, TableError> {
        let mode = options.mode()?;
        let state = TableState::new(&columns, &data, mode)?;
        Ok(Self {
            columns,
            options,
            data,
            state,
            events: Vec::new(),
        })
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// Visible column headers.
    pub fn headers(&self) -> Vec<Header> {
        self.state
            .columns()
            .iter()
            .filter(|c| !c.hidden)
            .map(Header::from_column)
            .collect()
    }

    pub fn rows(&self) -> &[Row] {
        self.state.rows()
    }

    pub fn original_rows(&self) -> &[Row] {
        self.state.original_rows()
    }

    pub fn selected_rows(&self) -> &[Row] {
        self.state.selected_rows()
    }

    pub fn pagination(&self) -> Pagination {
        self.state.pagination()
    }

    pub fn sort_by(&self) -> Option<&SortBy> {
        self.state.sort_by()
    }

    pub fn toggle_all_state(&self) -> bool {
        self.state.toggle_all_state()
    }

    pub fn can_next(&self) -> bool {
        self.state.can_next()
    }

    pub fn can_prev(&self) -> bool {
        self.state.can_prev()
    }

    /// The underlying state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// The raw data the rows were built from.
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    // =========================================================================
    // Dispatchers
    // =========================================================================

    /// Apply any action.
    pub fn dispatch(&mut self, action: Action) -> Result<(), TableError> {
        match action {
            Action::SetRows(data) => self.set_data(data),
            action => {
                let transition = reduce(&self.state, action)?;
                self.commit(transition);
            }
        }
        Ok(())
    }

    /// Sort by a column. Fails if the column was never declared.
    pub fn toggle_sort(&mut self, column: &str, descending: Option<bool>) -> Result<(), TableError> {
        let transition = reducer::toggle_sort(&self.state, column, descending)?;
        self.commit(transition);
        Ok(())
    }

    pub fn select_row(&mut self, id: usize) {
        let transition = reducer::select_row(&self.state, id);
        self.commit(transition);
    }

    pub fn toggle_all(&mut self) {
        let transition = reducer::toggle_all(&self.state);
        self.commit(transition);
    }

    pub fn next_page(&mut self) {
        let transition = reducer::next_page(&self.state);
        self.commit(transition);
    }

    pub fn prev_page(&mut self) {
        let transition = reducer::prev_page(&self.state);
        self.commit(transition);
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Replace the data set (`SET_ROWS`).
    pub fn set_data(&mut self, data: Vec<Record>) {
        let transition = reducer::set_rows(&self.state, &data);
        self.data = data;
        self.commit(transition);
    }

    /// Take the totals of a new caller page descriptor.
    pub fn set_page(&mut self, page: PageDescriptor) {
        self.options.page = Some(page);
        self.state = self.state.with_page_totals(&page);
    }

    /// Replace the column declarations. The state starts over.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> Result<(), TableError> {
        let mode = self.options.mode()?;
        self.state = TableState::new(&columns, &self.data, mode)?;
        self.columns = columns;
        Ok(())
    }

    /// Replace the options. The state starts over.
    ///
    /// Invalid options are rejected and the current state is kept.
    pub fn set_options(&mut self, options: TableOptions) -> Result<(), TableError> {
        let mode = options.mode()?;
        self.state = TableState::new(&self.columns, &self.data, mode)?;
        self.options = options;
        Ok(())
    }

    /// Take the notifications queued since the last call.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    fn commit(&mut self, transition: Transition) {
        self.state = transition.state;
        if let Some(event) = transition.event {
            log::debug!("Table event {:?}", event);
            self.events.push(event);
        }
    }
}
