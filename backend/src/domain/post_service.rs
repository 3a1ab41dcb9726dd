//! Post domain service.
//!
//! Implements the post driving ports on top of [`PostAggregateStore`]:
//! single-post reads, the paged feed, and every post mutation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CommentRepository, FeedPage, FeedRequest, ImageRepository, PostDraft, PostRepository,
    PostsCommand, PostsQuery, TagRepository,
};
use crate::domain::{
    Error, MAX_FILE_NAME_CHARS, Post, PostAggregateStore, PostId, check_tag_text,
};

/// Post service implementing [`PostsQuery`] and [`PostsCommand`].
pub struct PostAggregateService<P, T, C, I> {
    store: PostAggregateStore<P, T, C, I>,
}

impl<P, T, C, I> Clone for PostAggregateService<P, T, C, I> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<P, T, C, I> PostAggregateService<P, T, C, I> {
    /// Create a service over the four entity stores.
    pub fn new(posts: Arc<P>, tags: Arc<T>, comments: Arc<C>, images: Arc<I>) -> Self {
        Self {
            store: PostAggregateStore::new(posts, tags, comments, images),
        }
    }
}

/// Reject drafts the stores would refuse partway through a write.
///
/// Titles are checked when [`crate::domain::PostContent`] is built; tag names
/// and the file name are only free text until here.
fn check_draft(draft: &PostDraft) -> Result<(), Error> {
    check_tag_text(&draft.tags).map_err(|err| Error::invalid_request(err.to_string()))?;
    if draft.image.file_name.chars().count() > MAX_FILE_NAME_CHARS {
        return Err(Error::invalid_request(format!(
            "image file name must be at most {MAX_FILE_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

#[async_trait]
impl<P, T, C, I> PostsQuery for PostAggregateService<P, T, C, I>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
    I: ImageRepository,
{
    async fn get_post(&self, id: PostId) -> Result<Post, Error> {
        self.store.fetch_full(id).await
    }

    async fn get_feed_page(&self, request: FeedRequest) -> Result<FeedPage, Error> {
        let window = request.page.window();
        let posts = self.store.posts();

        let (records, count) = match request.search_tag() {
            Some(tag) => (
                posts.list_by_tag(tag, window).await?,
                posts.count_by_tag(tag).await?,
            ),
            None => (posts.list(window).await?, posts.count_all().await?),
        };
        if count.is_none() {
            debug!("feed count query returned no row; treating total as zero");
        }

        let mut page = Vec::with_capacity(records.len());
        for record in records {
            page.push(self.store.attach_dependents(record).await?);
        }

        Ok(FeedPage {
            posts: page,
            total_count: count.unwrap_or(0),
            paging: request.page.paging(count),
        })
    }
}

#[async_trait]
impl<P, T, C, I> PostsCommand for PostAggregateService<P, T, C, I>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
    I: ImageRepository,
{
    async fn create_post(&self, draft: PostDraft) -> Result<Post, Error> {
        check_draft(&draft)?;
        let PostDraft {
            content,
            image,
            tags,
        } = draft;
        self.store.create_full(content, &image, &tags).await
    }

    async fn update_post(&self, id: PostId, draft: PostDraft) -> Result<Post, Error> {
        check_draft(&draft)?;
        let PostDraft {
            content,
            image,
            tags,
        } = draft;
        self.store.update_full(id, content, &image, &tags).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), Error> {
        self.store.delete_full(id).await
    }

    async fn like_post(&self, id: PostId, increment: bool) -> Result<Post, Error> {
        self.store.like(id, increment).await
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
