//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every endpoint from the inbound layer (posts, comments,
//!   images, health)
//! - **Schemas**: request and response bodies plus wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`], [`PagingSchema`]) that describe
//!   domain and pagination types without coupling them to utoipa
//!
//! The generated document is served by Swagger UI in debug builds.

use crate::inbound::http::posts_dto::{
    CommentRequestBody, CommentResponseBody, FeedPageResponseBody, ImageBody, LikeRequestBody,
    PostRequestBody, PostResponseBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PagingSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog backend API",
        description = "HTTP interface for posts, tags, comments, images, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::update_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::posts::like_post,
        crate::inbound::http::comments::add_comment,
        crate::inbound::http::comments::update_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::images::get_image,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        PagingSchema,
        PostRequestBody,
        ImageBody,
        PostResponseBody,
        FeedPageResponseBody,
        LikeRequestBody,
        CommentRequestBody,
        CommentResponseBody,
    )),
    tags(
        (name = "posts", description = "Posts, the feed, and likes"),
        (name = "comments", description = "Comments on a post"),
        (name = "images", description = "Post images"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
