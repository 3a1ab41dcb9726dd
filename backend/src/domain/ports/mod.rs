//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Command`, `*Query`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::{define_port_error, define_store_error};

mod comment_repository;
mod comments_command;
mod image_repository;
mod images_query;
mod post_repository;
mod posts_command;
mod posts_query;
mod tag_repository;

pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comments_command::CommentsCommand;
#[cfg(test)]
pub use comments_command::MockCommentsCommand;
pub use image_repository::{ImageRepository, ImageRepositoryError};
#[cfg(test)]
pub use image_repository::MockImageRepository;
pub use images_query::ImagesQuery;
#[cfg(test)]
pub use images_query::MockImagesQuery;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use posts_command::{PostDraft, PostsCommand};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_query::{FeedPage, FeedRequest, PostsQuery};
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use tag_repository::{TagRepository, TagRepositoryError};
#[cfg(test)]
pub use tag_repository::MockTagRepository;

/// Generic constructors shared by every store error enum.
///
/// Adapters that serve several ports (the Diesel helpers, the in-memory
/// store) build port-specific errors through this trait.
pub trait StoreError: Sized {
    /// The store could not be reached.
    fn connection_failed(message: String) -> Self;

    /// A statement failed during execution.
    fn query_failed(message: String) -> Self;
}
