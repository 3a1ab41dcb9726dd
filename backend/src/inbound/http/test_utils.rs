//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{MockCommentsCommand, MockImagesQuery, MockPostsCommand, MockPostsQuery};
use crate::domain::{Post, PostContent, PostId, PostRecord};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;

/// Driving-port mocks; set expectations, then call [`MockPorts::into_app`].
#[derive(Default)]
pub struct MockPorts {
    pub posts: MockPostsQuery,
    pub posts_command: MockPostsCommand,
    pub comments: MockCommentsCommand,
    pub images: MockImagesQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            posts: Arc::new(self.posts),
            posts_command: Arc::new(self.posts_command),
            comments: Arc::new(self.comments),
            images: Arc::new(self.images),
        }
    }

    /// Build an app serving every blog route under `/api/v1`.
    pub fn into_app(
        self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.into_state()))
            .service(api_scope())
    }
}

/// A bare post with no dependents.
pub fn sample_post(id: i64) -> Post {
    Post::from_record(PostRecord {
        id: PostId::new(id),
        content: PostContent::new(format!("Post {id}"), "body").expect("valid content"),
        likes_count: 0,
    })
}
