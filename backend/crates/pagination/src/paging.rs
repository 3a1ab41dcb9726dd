//! Page-availability flags derived from a row count.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Position of a page within a result set.
///
/// Serialised in camelCase for API clients.
///
/// # Examples
///
/// ```
/// use pagination::{PageRequest, page_info};
///
/// let request = PageRequest::new(2, 10).expect("valid request");
/// let paging = page_info(request, 25);
/// assert_eq!(paging.page_number, 2);
/// assert!(paging.has_next && paging.has_previous);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// One-based number of this page.
    pub page_number: u32,
    /// Maximum number of items per page.
    pub page_size: u32,
    /// Whether a later page holds items.
    pub has_next: bool,
    /// Whether an earlier page holds items.
    pub has_previous: bool,
}

/// Number of pages needed to show `total_count` items, `ceil(total / size)`.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use pagination::page_count;
///
/// let size = NonZeroU32::new(10).expect("non-zero");
/// assert_eq!(page_count(0, size), 0);
/// assert_eq!(page_count(25, size), 3);
/// assert_eq!(page_count(30, size), 3);
/// ```
#[must_use]
pub fn page_count(total_count: u64, page_size: NonZeroU32) -> u64 {
    total_count.div_ceil(u64::from(page_size.get()))
}

/// Compute the [`Paging`] envelope for `request` over `total_count` rows.
///
/// A next page exists when the requested page precedes the last page. A
/// previous page exists for any page after the first. Both flags are false
/// when nothing matched, whatever page was asked for.
#[must_use]
pub fn page_info(request: PageRequest, total_count: u64) -> Paging {
    let page_number = request.number();
    let page_size = request.size();
    let pages = page_count(total_count, request.non_zero_size());
    let has_rows = total_count != 0;

    Paging {
        page_number,
        page_size,
        has_next: has_rows && u64::from(page_number) < pages,
        has_previous: has_rows && page_number > 1,
    }
}
