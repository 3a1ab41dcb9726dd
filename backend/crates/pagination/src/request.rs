//! Validated page requests and the storage windows they select.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::paging::{Paging, page_info};

/// Page number used when a client does not ask for one.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when a client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Reasons a page request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers start at one.
    #[error("page number must be at least 1")]
    ZeroPageNumber,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// One-based page number and page size, both guaranteed positive.
///
/// # Examples
///
/// ```
/// use pagination::{PageRequest, PageRequestError};
///
/// assert!(PageRequest::new(1, 10).is_ok());
/// assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::ZeroPageNumber));
/// assert_eq!(PageRequest::new(1, 0), Err(PageRequestError::ZeroPageSize));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    number: NonZeroU32,
    size: NonZeroU32,
}

impl PageRequest {
    /// Validate a page number and size supplied by a caller.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPageNumber`] or
    /// [`PageRequestError::ZeroPageSize`] when either value is zero. The page
    /// number is checked first.
    pub const fn new(number: u32, size: u32) -> Result<Self, PageRequestError> {
        let Some(checked_number) = NonZeroU32::new(number) else {
            return Err(PageRequestError::ZeroPageNumber);
        };
        let Some(checked_size) = NonZeroU32::new(size) else {
            return Err(PageRequestError::ZeroPageSize);
        };
        Ok(Self {
            number: checked_number,
            size: checked_size,
        })
    }

    /// One-based page number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number.get()
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    pub(crate) const fn non_zero_size(&self) -> NonZeroU32 {
        self.size
    }

    /// Rows to skip and rows to take for this page.
    ///
    /// `offset = (number - 1) * size` and `limit = size`. The product of two
    /// `u32` values always fits in a `u64`.
    #[must_use]
    pub fn window(&self) -> Window {
        let skipped_pages = u64::from(self.number.get().saturating_sub(1));
        Window {
            offset: skipped_pages.saturating_mul(u64::from(self.size.get())),
            limit: self.size.get(),
        }
    }

    /// Page-availability flags for this request given the matching row count.
    ///
    /// An absent count is treated as zero.
    #[must_use]
    pub fn paging(&self, total_count: Option<u64>) -> Paging {
        page_info(*self, total_count.unwrap_or_default())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: NonZeroU32::MIN,
            size: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// `OFFSET`/`LIMIT` pair selecting one page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// Number of rows to skip.
    pub offset: u64,
    /// Maximum number of rows to return.
    pub limit: u32,
}
