//! Offset pagination arithmetic.
//!
//! Pages are 1-based. Out-of-range pages are not an error: they map to an
//! offset past the end of the result set and simply yield no items.

/// Resolved window for a single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Effective page number (always >= 1)
    pub page: u64,
    pub offset: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// One page of items together with the totals of the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Clamp a raw page number to the first page.
pub fn clamp_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Compute offset, limit and page count for `page` over `total_items`.
///
/// `page_size` must be non-zero.
pub fn paginate(total_items: u64, page_size: u64, page: i64) -> Pagination {
    debug_assert!(page_size > 0, "page size must be non-zero");

    let page = clamp_page(page);

    Pagination {
        page,
        offset: (page - 1).saturating_mul(page_size),
        limit: page_size,
        total_pages: total_items.div_ceil(page_size),
    }
}
