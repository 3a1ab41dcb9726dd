//! Driving port for post mutations.

use async_trait::async_trait;

use crate::domain::{Error, ImageUpload, Post, PostContent, PostId};

/// Everything a client supplies when writing a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub content: PostContent,
    pub image: ImageUpload,
    /// Free-text, whitespace-separated tag names.
    pub tags: String,
}

/// Driving port for creating, editing, deleting, and liking posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Create a post with its image and tags.
    async fn create_post(&self, draft: PostDraft) -> Result<Post, Error>;

    /// Replace a post's text, image, and tags. Likes and comments survive.
    ///
    /// # Errors
    ///
    /// Returns a `not_found` error when no post has `id`.
    async fn update_post(&self, id: PostId, draft: PostDraft) -> Result<Post, Error>;

    /// Delete a post and its dependents. Unknown ids are a no-op.
    async fn delete_post(&self, id: PostId) -> Result<(), Error>;

    /// Add a like when `increment` is true, otherwise remove one (never below
    /// zero). Returns the post as it is afterwards.
    ///
    /// # Errors
    ///
    /// Returns a `not_found` error when no post has `id`.
    async fn like_post(&self, id: PostId, increment: bool) -> Result<Post, Error>;
}
