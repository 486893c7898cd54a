//! Table options and the operating mode they resolve to.

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;
use crate::pagination::DEFAULT_PER_PAGE;
use crate::pagination::PageDescriptor;
use crate::pagination::PageRounding;

/// Who owns an ordering or slicing concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The engine computes it from the full row set.
    SelfManaged,
    /// The caller computes it; the engine only records and reports requests.
    ExternallyDriven,
}

/// Pagination mode with the data each mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    SelfManaged { per_page: usize, rounding: PageRounding },
    ExternallyDriven(PageDescriptor),
}

/// The validated operating mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMode {
    pub sort: Mode,
    pub pagination: PaginationMode,
}

impl Default for TableMode {
    fn default() -> Self {
        Self {
            sort: Mode::SelfManaged,
            pagination: PaginationMode::SelfManaged {
                per_page: DEFAULT_PER_PAGE,
                rounding: PageRounding::Floor,
            },
        }
    }
}

/// Construction options for a table.
///
/// These are the flags a caller sets. [`TableOptions::mode`] validates them
/// into a [`TableMode`].
///
/// # Example
///
/// ```
/// use tabula_lib::options::TableOptions;
/// use tabula_lib::pagination::PageDescriptor;
///
/// let options = TableOptions::new()
///     .with_manual_sort_by(true)
///     .with_manual_pagination(true)
///     .with_page(PageDescriptor::new(10, 0, 25, 3));
/// assert!(options.mode().is_ok());
///
/// let broken = TableOptions::new().with_manual_pagination(true);
/// assert!(broken.mode().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// The caller sorts the rows; the engine only tracks the requested sort.
    ///
    /// Default: false
    pub manual_sort_by: bool,

    /// The caller pages the rows; requires `page`.
    ///
    /// Default: false
    pub manual_pagination: bool,

    /// Page descriptor for manual pagination.
    pub page: Option<PageDescriptor>,

    /// Rows per page for self-managed pagination.
    ///
    /// Default: 10
    pub per_page: Option<usize>,

    /// Page counting for self-managed pagination.
    ///
    /// Default: floor
    pub page_rounding: PageRounding,
}

impl TableOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether sorting is externally driven.
    pub fn with_manual_sort_by(mut self, manual: bool) -> Self {
        self.manual_sort_by = manual;
        self
    }

    /// Sets whether pagination is externally driven.
    pub fn with_manual_pagination(mut self, manual: bool) -> Self {
        self.manual_pagination = manual;
        self
    }

    /// Sets the page descriptor.
    pub fn with_page(mut self, page: PageDescriptor) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the self-managed page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the self-managed page counting.
    pub fn with_page_rounding(mut self, rounding: PageRounding) -> Self {
        self.page_rounding = rounding;
        self
    }

    /// Validate into a [`TableMode`].
    ///
    /// Fails when manual pagination has no page descriptor, or when the page
    /// size in effect is zero.
    pub fn mode(&self) -> Result<TableMode, TableError> {
        let sort = if self.manual_sort_by {
            Mode::ExternallyDriven
        } else {
            Mode::SelfManaged
        };

        let pagination = if self.manual_pagination {
            let page = self.page.ok_or_else(|| {
                TableError::invalid_configuration("manual pagination is set. Missing page descriptor")
            })?;
            if page.size == 0 {
                return Err(TableError::invalid_configuration("page size must be positive"));
            }
            PaginationMode::ExternallyDriven(page)
        } else {
            let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
            if per_page == 0 {
                return Err(TableError::invalid_configuration("per_page must be positive"));
            }
            PaginationMode::SelfManaged {
                per_page,
                rounding: self.page_rounding,
            }
        };

        Ok(TableMode { sort, pagination })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(TableOptions::new().mode().unwrap(), TableMode::default());
    }

    #[test]
    fn test_manual_pagination_requires_page() {
        let err = TableOptions::new()
            .with_manual_pagination(true)
            .mode()
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(TableOptions::new().with_per_page(0).mode().is_err());
        assert!(
            TableOptions::new()
                .with_manual_pagination(true)
                .with_page(PageDescriptor::new(0, 0, 0, 0))
                .mode()
                .is_err()
        );
    }

    #[test]
    fn test_page_ignored_without_manual_pagination() {
        let mode = TableOptions::new()
            .with_page(PageDescriptor::new(25, 1, 100, 4))
            .mode()
            .unwrap();
        assert!(matches!(
            mode.pagination,
            PaginationMode::SelfManaged { per_page: 10, .. }
        ));
    }

    #[test]
    fn test_deserialize_options() {
        let json = r#"{
            "manual_sort_by": true,
            "manual_pagination": true,
            "page": {"size": 10, "index": 0, "count": 25, "totalPages": 3}
        }"#;
        let options: TableOptions = serde_json::from_str(json).unwrap();
        let mode = options.mode().unwrap();

        assert_eq!(mode.sort, Mode::ExternallyDriven);
        assert_eq!(
            mode.pagination,
            PaginationMode::ExternallyDriven(PageDescriptor::new(10, 0, 25, 3))
        );
    }
}
