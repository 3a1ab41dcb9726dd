//! Driving port for reading posts and the feed.

use async_trait::async_trait;
use pagination::{PageRequest, Paging};

use crate::domain::{Error, Post, PostId};

/// Which slice of the feed to read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRequest {
    /// Tag name to filter by. `None` or blank text selects every post.
    pub search: Option<String>,
    pub page: PageRequest,
}

impl FeedRequest {
    /// The tag filter, if one was given and is not blank.
    pub fn search_tag(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// One page of the feed with fully populated posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    /// Number of posts matching the filter across all pages.
    pub total_count: u64,
    pub paging: Paging,
}

/// Driving port for post reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Fetch one post with its tags, comments, and image.
    ///
    /// # Errors
    ///
    /// Returns a `not_found` error when no post has `id`.
    async fn get_post(&self, id: PostId) -> Result<Post, Error>;

    /// Fetch one page of the feed, newest first.
    async fn get_feed_page(&self, request: FeedRequest) -> Result<FeedPage, Error>;
}
