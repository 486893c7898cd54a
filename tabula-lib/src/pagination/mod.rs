//! Paginator: page metadata and slicing.

mod paged;

pub use paged::*;

use serde::Deserialize;
use serde::Serialize;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// A caller-owned page descriptor for externally driven pagination.
///
/// Field names follow the fetch layer's JSON (`totalPages`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Page size.
    pub size: usize,
    /// Zero-based current page.
    pub index: usize,
    /// Total number of items across all pages.
    pub count: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

impl PageDescriptor {
    pub fn new(size: usize, index: usize, count: usize, total_pages: usize) -> Self {
        Self {
            size,
            index,
            count,
            total_pages,
        }
    }
}

/// How the self-managed paginator counts pages.
///
/// `Floor` leaves a trailing partial page out of `total_pages` (it is still
/// reachable with `next_page`). `Ceil` counts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRounding {
    #[default]
    Floor,
    Ceil,
}

impl PageRounding {
    /// Page count for `items` at `per_page` rows per page.
    pub fn total_pages(self, items: usize, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        match self {
            PageRounding::Floor => items / per_page,
            PageRounding::Ceil => items.div_ceil(per_page),
        }
    }
}

/// Page metadata published with the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Zero-based current page.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Pagination {
    /// Metadata for a self-managed paginator over `items` rows, on page 0.
    pub fn self_managed(items: usize, per_page: usize, rounding: PageRounding) -> Self {
        Self {
            page: 0,
            per_page,
            total_pages: rounding.total_pages(items, per_page),
            total_items: items,
        }
    }

    /// Metadata taken from a caller's page descriptor.
    pub fn from_descriptor(descriptor: &PageDescriptor) -> Self {
        Self {
            page: descriptor.index,
            per_page: descriptor.size,
            total_pages: descriptor.total_pages,
            total_items: descriptor.count,
        }
    }

    /// Whether a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.page != 0
    }

    /// Whether any item lies beyond the end of the current page.
    pub fn can_next(&self) -> bool {
        self.page.saturating_add(1).saturating_mul(self.per_page) < self.total_items
    }

    /// The page `next_page` moves to, or `None` at the last page.
    pub fn next_page(&self) -> Option<usize> {
        if self.page >= self.total_pages || !self.can_next() {
            None
        } else {
            self.page.checked_add(1)
        }
    }

    /// The page `prev_page` moves to, or `None` at page 0.
    pub fn prev_page(&self) -> Option<usize> {
        self.page.checked_sub(1)
    }

    /// Index of the last page holding any item.
    pub fn last_filled_page(&self) -> usize {
        if self.total_items == 0 || self.per_page == 0 {
            0
        } else {
            (self.total_items - 1) / self.per_page
        }
    }

    /// Item window `[start, end)` of the current page.
    pub fn window(&self) -> (usize, usize) {
        let start = self.page.saturating_mul(self.per_page);
        (start, start.saturating_add(self.per_page))
    }

    /// One-based `(first, last)` item numbers on the current page.
    ///
    /// Reads as "Showing 11 to 20 of 25". `None` when the page is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let (start, end) = self.window();
        if start >= self.total_items {
            return None;
        }
        Some((start + 1, end.min(self.total_items)))
    }
}

/// The `[page * per_page, page * per_page + per_page)` slice of `items`.
pub fn page_slice<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
