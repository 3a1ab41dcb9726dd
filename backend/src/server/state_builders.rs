//! Builders for the HTTP state from whichever store backs this process.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use blog_backend::domain::ports::{
    CommentRepository, ImageRepository, PostRepository, TagRepository,
};
use blog_backend::domain::{CommentService, ImageService, PostAggregateService};
use blog_backend::inbound::http::state::HttpState;
use blog_backend::outbound::memory::InMemoryBlogStore;
use blog_backend::outbound::persistence::{
    DieselCommentRepository, DieselImageRepository, DieselPostRepository, DieselTagRepository,
};

use super::ServerConfig;

/// Wire the domain services over one set of store adapters.
fn http_state_over<P, T, C, I>(
    posts: Arc<P>,
    tags: Arc<T>,
    comments: Arc<C>,
    images: Arc<I>,
) -> HttpState
where
    P: PostRepository + 'static,
    T: TagRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageRepository + 'static,
{
    let post_service = Arc::new(PostAggregateService::new(
        posts.clone(),
        tags,
        comments.clone(),
        images.clone(),
    ));
    HttpState::new(
        post_service,
        Arc::new(CommentService::new(posts, comments)),
        Arc::new(ImageService::new(images)),
    )
}

/// Use the Diesel adapters when a pool is configured, otherwise an
/// in-process store that is lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("serving posts from PostgreSQL");
            http_state_over(
                Arc::new(DieselPostRepository::new(pool.clone())),
                Arc::new(DieselTagRepository::new(pool.clone())),
                Arc::new(DieselCommentRepository::new(pool.clone())),
                Arc::new(DieselImageRepository::new(pool.clone())),
            )
        }
        None => {
            warn!("no database configured; posts are kept in memory and lost on restart");
            let store = Arc::new(InMemoryBlogStore::new());
            http_state_over(store.clone(), store.clone(), store.clone(), store)
        }
    };
    web::Data::new(state)
}
