//! Port for the tag vocabulary and post-to-tag bindings.

use async_trait::async_trait;

use crate::domain::{PostId, Tag, TagId, TagName};

use super::define_store_error;

define_store_error! {
    /// Errors raised by tag store adapters.
    TagRepositoryError {
        connection: "tag store connection failed: {message}",
        query: "tag store query failed: {message}",
    }
}

/// Port for tag rows and their bindings to posts.
///
/// Tag rows are only ever added, never removed. Every mutation here is
/// idempotent so callers can retry or repeat names without coordination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Tags bound to a post.
    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, TagRepositoryError>;

    /// Insert every name not yet present. Existing names, including repeats
    /// within `names`, are skipped silently.
    async fn insert_if_absent_batch(&self, names: &[TagName]) -> Result<(), TagRepositoryError>;

    /// Tag rows whose names appear in `names`. Unknown names are omitted.
    async fn tags_by_names(&self, names: &[TagName]) -> Result<Vec<Tag>, TagRepositoryError>;

    /// Bind each tag to the post. Existing bindings are kept.
    async fn bind_batch(&self, post_id: PostId, tag_ids: &[TagId])
    -> Result<(), TagRepositoryError>;

    /// Remove every binding of the post, returning how many were removed.
    async fn unbind_all_for_post(&self, post_id: PostId) -> Result<u64, TagRepositoryError>;
}
