//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, NewComment, PostId};

use super::define_store_error;

define_store_error! {
    /// Errors raised by comment store adapters.
    CommentRepositoryError {
        connection: "comment store connection failed: {message}",
        query: "comment store query failed: {message}",
    }
}

/// Port for comment storage.
///
/// Single-comment mutations are keyed by both comment id and owning post id;
/// a comment is never touched through a post that does not own it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments on a post in ascending id order.
    async fn for_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError>;

    async fn insert(&self, comment: &NewComment) -> Result<CommentId, CommentRepositoryError>;

    /// Replace the text of `comment`. Returns `false` when no row matched its
    /// id and post id.
    async fn update_text(&self, comment: &Comment) -> Result<bool, CommentRepositoryError>;

    /// Delete one comment. Returns `false` when no row matched.
    async fn delete_by_id(
        &self,
        id: CommentId,
        post_id: PostId,
    ) -> Result<bool, CommentRepositoryError>;

    /// Delete every comment on a post, returning how many went away.
    async fn delete_all_for_post(&self, post_id: PostId) -> Result<u64, CommentRepositoryError>;
}
