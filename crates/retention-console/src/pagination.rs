//! Pagination arithmetic for the channel list.
//!
//! Bounds are recomputed from current inputs on every call; nothing here is
//! cached.

/// Rows per page in the admin data grid.
pub const PAGE_SIZE: usize = 10;

/// The first fetch pulls two pages so the first next-page is already local.
pub const INITIAL_FETCH_MULTIPLIER: usize = 2;

/// One-based display window plus the effective total it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First visible row, one-based.
    pub start: usize,
    /// Last visible row, one-based, capped at the effective total.
    pub end: usize,
    pub total: usize,
}

/// Server total adjusted as if the staged edits were already committed.
///
/// Approximates the post-commit count without a server round trip; staged
/// edits never overlap the unmaterialized remainder, so the arithmetic is
/// exact for disjoint add/remove key sets.
#[must_use]
pub fn effective_total(authoritative_total: usize, added: usize, removed: usize) -> usize {
    (authoritative_total + added).saturating_sub(removed)
}

/// Display window for a zero-based page index.
#[must_use]
pub fn window(page: usize, page_size: usize, effective_total: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let start = page * page_size + 1;
    let end = ((page + 1) * page_size).min(effective_total);
    PageWindow {
        start,
        end,
        total: effective_total,
    }
}
