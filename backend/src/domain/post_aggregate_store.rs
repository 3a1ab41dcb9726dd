//! Whole-aggregate operations over the post, tag, comment, and image stores.
//!
//! Each operation is a sequence of independent statements. Nothing is
//! wrapped in a transaction; every dependent step is idempotent or reports a
//! row count instead of failing, so a repeated or partially applied sequence
//! converges. Image storage failures on create and update are logged and do
//! not undo the post or tag work already done.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{CommentRepository, ImageRepository, PostRepository, TagRepository};
use crate::domain::{Error, ImageUpload, Post, PostContent, PostId, PostRecord, TagResolver};

/// Composes the per-entity stores into aggregate reads and writes.
pub struct PostAggregateStore<P, T, C, I> {
    posts: Arc<P>,
    tags: TagResolver<T>,
    comments: Arc<C>,
    images: Arc<I>,
}

impl<P, T, C, I> Clone for PostAggregateStore<P, T, C, I> {
    fn clone(&self) -> Self {
        Self {
            posts: Arc::clone(&self.posts),
            tags: self.tags.clone(),
            comments: Arc::clone(&self.comments),
            images: Arc::clone(&self.images),
        }
    }
}

impl<P, T, C, I> PostAggregateStore<P, T, C, I> {
    /// Orchestrate the four entity stores as one aggregate.
    pub fn new(posts: Arc<P>, tags: Arc<T>, comments: Arc<C>, images: Arc<I>) -> Self {
        Self {
            posts,
            tags: TagResolver::new(tags),
            comments,
            images,
        }
    }

    pub(crate) fn posts(&self) -> &P {
        &self.posts
    }

    pub(crate) fn comments(&self) -> &C {
        &self.comments
    }

    pub(crate) fn images(&self) -> &I {
        &self.images
    }
}

fn post_not_found(id: PostId) -> Error {
    Error::not_found(format!("post {id} was not found"))
}

impl<P, T, C, I> PostAggregateStore<P, T, C, I>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
    I: ImageRepository,
{
    /// Load a post with its tags, comments, and image.
    ///
    /// # Errors
    ///
    /// `not_found` when no post has `id`; store failures otherwise.
    pub async fn fetch_full(&self, id: PostId) -> Result<Post, Error> {
        let record = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| post_not_found(id))?;
        self.attach_dependents(record).await
    }

    /// Attach tags, comments, and image to a bare post row.
    pub(crate) async fn attach_dependents(&self, record: PostRecord) -> Result<Post, Error> {
        let mut post = Post::from_record(record);
        post.tags = self.tags.tags_for(post.id).await?;
        post.comments = self.comments.for_post(post.id).await?;
        post.image = self.images.by_post_id(post.id).await?;
        Ok(post)
    }

    /// Create a post, store its image, and bind its tags.
    ///
    /// The returned post carries the bound tags, no comments, and the image as
    /// stored (absent when storing it failed).
    pub async fn create_full(
        &self,
        content: PostContent,
        image: &ImageUpload,
        tags_text: &str,
    ) -> Result<Post, Error> {
        let id = self.posts.insert(&content).await?;
        info!(post_id = %id, "created post");

        let image_stored = self.store_image(id, image).await;
        let tags = self.tags.ensure_and_bind(id, tags_text).await?;

        let mut post = Post::from_record(PostRecord {
            id,
            content,
            likes_count: 0,
        });
        post.tags = tags;
        if image_stored {
            post.image = self.images.by_post_id(id).await?;
        }
        Ok(post)
    }

    /// Replace a post's title, text, image, and tags.
    ///
    /// Likes and comments are kept. The old image is deleted before the new
    /// one is stored, and all tag bindings are dropped before the new text is
    /// resolved.
    ///
    /// # Errors
    ///
    /// `not_found` when no post has `id`; store failures otherwise.
    pub async fn update_full(
        &self,
        id: PostId,
        content: PostContent,
        image: &ImageUpload,
        tags_text: &str,
    ) -> Result<Post, Error> {
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(post_not_found(id));
        }

        self.posts.update_title_text(id, &content).await?;

        if !self.images.delete(id).await? {
            debug!(post_id = %id, "post had no image to replace");
        }
        self.store_image(id, image).await;

        self.tags.unbind_all(id).await?;
        self.tags.ensure_and_bind(id, tags_text).await?;

        self.fetch_full(id).await
    }

    /// Delete a post with its comments, tag bindings, and image.
    ///
    /// Dependents go first so the post row is removed last. Steps that find
    /// nothing to remove are logged, not treated as failures, which makes
    /// deleting an unknown post a no-op.
    pub async fn delete_full(&self, id: PostId) -> Result<(), Error> {
        let comments = self.comments.delete_all_for_post(id).await?;
        let bindings = self.tags.unbind_all(id).await?;
        let image = self.images.delete(id).await?;
        let posts = self.posts.delete_by_id(id).await?;

        if posts == 0 {
            info!(post_id = %id, "post to delete was not found");
        } else {
            info!(post_id = %id, comments, bindings, image, "deleted post");
        }
        Ok(())
    }

    /// Add or remove one like, then reload the post.
    ///
    /// Removal is a conditional single statement, so the counter never drops
    /// below zero.
    ///
    /// # Errors
    ///
    /// `not_found` when no post has `id`; store failures otherwise.
    pub async fn like(&self, id: PostId, increment: bool) -> Result<Post, Error> {
        if increment {
            self.posts.increment_likes(id).await?;
        } else {
            self.posts.decrement_likes_if_positive(id).await?;
        }
        self.fetch_full(id).await
    }

    /// Store `image` for the post, logging instead of failing.
    async fn store_image(&self, id: PostId, image: &ImageUpload) -> bool {
        match self.images.save(id, image).await {
            Ok(true) => true,
            Ok(false) => {
                warn!(post_id = %id, file_name = %image.file_name, "image was not stored");
                false
            }
            Err(error) => {
                warn!(post_id = %id, %error, "failed to store image");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "post_aggregate_store_tests.rs"]
mod tests;
