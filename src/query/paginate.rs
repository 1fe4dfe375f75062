//! Pagination over the sorted result set
//!
//! A pure slice with metadata. Inputs arrive pre-clamped from the
//! boundary (`page >= 1`, `limit` in [1, 100]); an out-of-range page is
//! an empty slice, never an error.

/// One page of results plus the numbers a caller needs for paging UI
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The records on this page, in final order
    pub items: Vec<T>,
    /// Matching records across ALL pages (post-filter, pre-slice)
    pub total: usize,
    /// The 1-based page that was requested
    pub page: usize,
    /// The per-page limit that was applied
    pub limit: usize,
    /// ceil(total / limit); zero when nothing matched
    pub total_pages: usize,
}

/// Slices an ordered sequence into pages
pub struct Paginator;

impl Paginator {
    /// Takes the requested window out of the full ordered set.
    ///
    /// `total` always reflects the whole filtered set, so callers can
    /// render "N results" regardless of which page they asked for.
    pub fn paginate<T>(records: Vec<T>, page: usize, limit: usize) -> Page<T> {
        let total = records.len();
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };

        let items = records
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Page {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}
