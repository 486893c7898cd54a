//! Paged payload from the data/fetch collaborator.

use serde::Deserialize;
use serde::Serialize;

use super::PageDescriptor;
use crate::model::Record;

/// One page of results plus the paging metadata the list endpoint returns.
///
/// Deserializes from `{"count": 25, "results": [...], "totalPages": 3,
/// "currentPage": 0}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedData {
    /// Total item count across all pages.
    pub count: usize,
    /// The records on this page.
    pub results: Vec<Record>,
    pub total_pages: usize,
    /// Zero-based index of this page.
    pub current_page: usize,
}

impl PagedData {
    /// The page descriptor for this payload at `size` rows per page.
    pub fn descriptor(&self, size: usize) -> PageDescriptor {
        PageDescriptor::new(size, self.current_page, self.count, self.total_pages)
    }

    /// Returns `true` if a page follows this one.
    pub fn has_more(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    /// Consumes the payload and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.results
    }
}
