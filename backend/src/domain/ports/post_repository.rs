//! Port for post row persistence.
//!
//! The post store only knows post rows: title, text, and the like counter.
//! Tags, comments, and images live behind their own ports and are joined into
//! the aggregate by [`PostAggregateStore`](crate::domain::PostAggregateStore).

use async_trait::async_trait;
use pagination::Window;

use crate::domain::{PostContent, PostId, PostRecord};

use super::define_store_error;

define_store_error! {
    /// Errors raised by post store adapters.
    PostRepositoryError {
        connection: "post store connection failed: {message}",
        query: "post store query failed: {message}",
    }
}

/// Port for storing and listing post rows.
///
/// Listings are ordered by descending id (newest first) and restricted to
/// the supplied [`Window`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts in the window, newest first.
    async fn list(&self, window: Window) -> Result<Vec<PostRecord>, PostRepositoryError>;

    /// Posts bound to the tag named `tag`, each at most once, newest first.
    async fn list_by_tag(
        &self,
        tag: &str,
        window: Window,
    ) -> Result<Vec<PostRecord>, PostRepositoryError>;

    /// Number of posts, or `None` when the store reports no count.
    async fn count_all(&self) -> Result<Option<u64>, PostRepositoryError>;

    /// Number of distinct posts bound to `tag`, or `None` when unknown.
    async fn count_by_tag(&self, tag: &str) -> Result<Option<u64>, PostRepositoryError>;

    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostRepositoryError>;

    /// Store a new post with zero likes and return its assigned id.
    async fn insert(&self, content: &PostContent) -> Result<PostId, PostRepositoryError>;

    /// Replace title and text in place. The like counter is left untouched.
    async fn update_title_text(
        &self,
        id: PostId,
        content: &PostContent,
    ) -> Result<(), PostRepositoryError>;

    /// Add one like in a single statement.
    async fn increment_likes(&self, id: PostId) -> Result<(), PostRepositoryError>;

    /// Remove one like in a single statement, only when the counter is positive.
    async fn decrement_likes_if_positive(&self, id: PostId) -> Result<(), PostRepositoryError>;

    /// Delete the post row, returning how many rows went away.
    async fn delete_by_id(&self, id: PostId) -> Result<u64, PostRepositoryError>;
}
