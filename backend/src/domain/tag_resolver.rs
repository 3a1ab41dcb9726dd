//! Turn free-text tag input into persisted tags bound to a post.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{TagRepository, TagRepositoryError};
use crate::domain::{PostId, Tag, TagId, parse_tag_names};

/// Resolves tag text against the shared vocabulary.
///
/// Resolution is three idempotent steps: insert the names that are missing,
/// read back the rows for every requested name, and bind those rows to the
/// post. A name that does not come back from the lookup is skipped.
pub struct TagResolver<T> {
    tags: Arc<T>,
}

impl<T> Clone for TagResolver<T> {
    fn clone(&self) -> Self {
        Self {
            tags: Arc::clone(&self.tags),
        }
    }
}

impl<T> TagResolver<T> {
    /// Create a resolver over the tag store.
    pub fn new(tags: Arc<T>) -> Self {
        Self { tags }
    }
}

impl<T> TagResolver<T>
where
    T: TagRepository,
{
    /// Ensure every tag in `tags_text` exists and bind them all to `post_id`.
    ///
    /// Blank input touches no storage and returns no tags.
    pub async fn ensure_and_bind(
        &self,
        post_id: PostId,
        tags_text: &str,
    ) -> Result<Vec<Tag>, TagRepositoryError> {
        let names = parse_tag_names(tags_text);
        if names.is_empty() {
            return Ok(Vec::new());
        }

        self.tags.insert_if_absent_batch(&names).await?;
        let resolved = self.tags.tags_by_names(&names).await?;
        if resolved.len() < names.len() {
            debug!(
                %post_id,
                requested = names.len(),
                resolved = resolved.len(),
                "some tag names did not resolve and will not be bound"
            );
        }
        if resolved.is_empty() {
            return Ok(resolved);
        }

        let tag_ids: Vec<TagId> = resolved.iter().map(|tag| tag.id).collect();
        self.tags.bind_batch(post_id, &tag_ids).await?;
        Ok(resolved)
    }

    /// Remove every tag binding of `post_id`. The tags themselves remain.
    pub async fn unbind_all(&self, post_id: PostId) -> Result<u64, TagRepositoryError> {
        let removed = self.tags.unbind_all_for_post(post_id).await?;
        if removed == 0 {
            info!(%post_id, "post had no tag bindings to remove");
        } else {
            debug!(%post_id, removed, "removed tag bindings");
        }
        Ok(removed)
    }

    /// Tags currently bound to `post_id`.
    pub async fn tags_for(&self, post_id: PostId) -> Result<Vec<Tag>, TagRepositoryError> {
        self.tags.tags_for_post(post_id).await
    }
}
