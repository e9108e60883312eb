//! Page window arithmetic.
//!
//! Pages are 1-based. Page `0` and page `1` both address the first window.

/// Zero-based number of records to skip for `page` of size `limit`.
#[must_use]
pub fn offset(page: u64, limit: u64) -> u64 {
    if page <= 1 {
        0
    } else {
        (page - 1).saturating_mul(limit)
    }
}

/// Number of pages needed to show `count` records, `limit` per page.
///
/// A zero `limit` yields zero pages.
#[must_use]
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}
