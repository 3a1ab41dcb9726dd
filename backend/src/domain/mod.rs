//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define the blog's strongly typed entities, the ports that connect
//! them to adapters, and the services that implement the driving ports. Keep
//! types transport agnostic; inbound adapters own the wire shapes.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Post / PostRecord / PostContent: the post aggregate and its parts.
//! - Tag / TagName: shared tag vocabulary.
//! - TagResolver / PostAggregateStore: multi-store composition.
//! - PostAggregateService / CommentService / ImageService: driving port
//!   implementations.

pub mod error;
pub mod ports;
pub mod trace_id;

mod comment;
mod comment_service;
mod ids;
mod image;
mod image_service;
mod post;
mod post_aggregate_store;
mod post_service;
mod tag;
mod tag_resolver;

pub use self::comment::{Comment, NewComment};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{CommentId, ImageId, PostId, TagId};
pub use self::image::{ImageBlob, ImageUpload, MAX_FILE_NAME_CHARS};
pub use self::image_service::ImageService;
pub use self::post::{
    MAX_TITLE_CHARS, Post, PostContent, PostRecord, PostValidationError, TEXT_PREVIEW_CHARS,
};
pub use self::post_aggregate_store::PostAggregateStore;
pub use self::post_service::PostAggregateService;
pub use self::tag::{
    MAX_TAG_NAME_CHARS, Tag, TagName, TagValidationError, check_tag_text, parse_tag_names,
    tags_to_text,
};
pub use self::tag_resolver::TagResolver;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use blog_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("post 1 was not found"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
