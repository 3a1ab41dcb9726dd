//! Driving port for comment mutations.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, Error, PostId};

/// Driving port for adding, editing, and deleting comments on a post.
///
/// Every operation fails with `not_found` when the post, or the comment
/// within that post, does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    async fn add_comment(&self, post_id: PostId, text: String) -> Result<Comment, Error>;

    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        text: String,
    ) -> Result<Comment, Error>;

    async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> Result<(), Error>;
}
