//! Offset pagination arithmetic.
//!
//! Pages are 1-indexed. Out-of-range pages are not an error; they yield an
//! empty slice. The filter/search endpoints always use
//! [`DEFAULT_PAGE_SIZE`]; the direct listing endpoints accept a
//! caller-specified limit clamped to `1..=MAX_PAGE_SIZE`.

/// Records per page unless the caller says otherwise.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Upper bound for a caller-specified limit.
pub const MAX_PAGE_SIZE: i64 = 500;

/// A resolved pagination window over a known total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-indexed page actually used (after clamping).
    pub page: i64,
    /// Records per page.
    pub limit: i64,
    /// Offset of the first record in the window.
    pub skip: i64,
    /// `ceil(total_count / limit)`.
    pub total_pages: i64,
}

/// Clamp a requested page number: absent or non-positive means page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p >= 1 => p,
        _ => 1,
    }
}

/// Clamp a caller-specified limit into `1..=MAX_PAGE_SIZE`, defaulting to
/// [`DEFAULT_PAGE_SIZE`] when absent or non-positive.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l >= 1 => l.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Offset of the first record on a (clamped) page.
///
/// Saturating: page numbers near `i64::MAX` are user input and must land
/// on an empty page, not overflow into a negative offset.
pub fn offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Resolve a pagination window.
///
/// `limit` must already be clamped (callers go through [`clamp_limit`] or
/// use [`DEFAULT_PAGE_SIZE`]).
pub fn window(page: Option<i64>, limit: i64, total_count: i64) -> PageWindow {
    let page = clamp_page(page);
    PageWindow {
        page,
        limit,
        skip: offset(page, limit),
        total_pages: (total_count.max(0) + limit - 1) / limit,
    }
}

/// Take the window's slice out of an in-memory candidate list.
///
/// Used by the in-process price filter, where the candidate set is already
/// materialized. The direct listing endpoints push `skip`/`limit` into the
/// store instead.
pub fn slice<T>(items: Vec<T>, window: &PageWindow) -> Vec<T> {
    items
        .into_iter()
        .skip(window.skip as usize)
        .take(window.limit as usize)
        .collect()
}
