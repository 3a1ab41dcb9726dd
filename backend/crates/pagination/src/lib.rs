//! Offset pagination primitives for the blog feed.
//!
//! The feed is paged by page number and page size. This crate turns a
//! validated [`PageRequest`] into the `OFFSET`/`LIMIT` [`Window`] used by
//! storage adapters and, once the matching row count is known, into the
//! [`Paging`] envelope returned to clients.
//!
//! Both computations are pure. Page numbers and sizes below one are rejected
//! when the request is constructed, so neither computation can observe them.
//!
//! # Example
//!
//! ```
//! use pagination::PageRequest;
//!
//! let request = PageRequest::new(3, 10).expect("page and size are positive");
//! let window = request.window();
//! assert_eq!((window.offset, window.limit), (20, 10));
//!
//! let paging = request.paging(Some(25));
//! assert!(!paging.has_next);
//! assert!(paging.has_previous);
//! ```

mod paging;
mod request;

pub use paging::{Paging, page_count, page_info};
pub use request::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest, PageRequestError, Window};
