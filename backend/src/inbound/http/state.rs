//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, which keeps them testable with mocks and free of I/O.

use std::sync::Arc;

use crate::domain::ports::{CommentsCommand, ImagesQuery, PostsCommand, PostsQuery};

/// Port implementations used by the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub posts: Arc<dyn PostsQuery>,
    pub posts_command: Arc<dyn PostsCommand>,
    pub comments: Arc<dyn CommentsCommand>,
    pub images: Arc<dyn ImagesQuery>,
}

impl HttpState {
    /// Bundle a service that implements both post ports with the comment
    /// and image ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use blog_backend::domain::{CommentService, ImageService, PostAggregateService};
    /// use blog_backend::inbound::http::state::HttpState;
    /// use blog_backend::outbound::memory::InMemoryBlogStore;
    ///
    /// let store = Arc::new(InMemoryBlogStore::new());
    /// let posts = Arc::new(PostAggregateService::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     store.clone(),
    ///     store.clone(),
    /// ));
    /// let state = HttpState::new(
    ///     posts,
    ///     Arc::new(CommentService::new(store.clone(), store.clone())),
    ///     Arc::new(ImageService::new(store)),
    /// );
    /// let _query = state.posts.clone();
    /// ```
    pub fn new<S>(
        posts: Arc<S>,
        comments: Arc<dyn CommentsCommand>,
        images: Arc<dyn ImagesQuery>,
    ) -> Self
    where
        S: PostsQuery + PostsCommand + 'static,
    {
        Self {
            posts: posts.clone(),
            posts_command: posts,
            comments,
            images,
        }
    }
}
