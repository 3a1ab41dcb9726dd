//! Post and feed HTTP handlers.
//!
//! ```text
//! GET    /api/v1/posts?search=&pageSize=&pageNumber=
//! POST   /api/v1/posts
//! GET    /api/v1/posts/{id}
//! PUT    /api/v1/posts/{id}
//! DELETE /api/v1/posts/{id}
//! POST   /api/v1/posts/{id}/like
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::debug;

use crate::domain::PostId;
use crate::domain::ports::FeedRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::posts_dto::{
    FeedPageResponseBody, FeedQuery, LikeRequestBody, PostRequestBody, PostResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, parse_page_request};

pub(crate) fn parse_post_id(raw: &str) -> ApiResult<PostId> {
    parse_id(raw, FieldName::new("id")).map(PostId::new)
}

/// Read one page of the feed, newest first, optionally filtered by tag.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(
        ("search" = Option<String>, Query, description = "Tag name to filter by"),
        ("pageSize" = Option<u32>, Query, description = "Posts per page, default 10"),
        ("pageNumber" = Option<u32>, Query, description = "One-based page number, default 1")
    ),
    responses(
        (status = 200, description = "Feed page", body = FeedPageResponseBody),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    query: web::Query<FeedQuery>,
) -> ApiResult<web::Json<FeedPageResponseBody>> {
    let FeedQuery {
        search,
        page_size,
        page_number,
    } = query.into_inner();
    let page = parse_page_request(page_number.as_deref(), page_size.as_deref())?;
    debug!(
        page = page.number(),
        size = page.size(),
        search = search.as_deref(),
        "reading feed"
    );

    let feed = state
        .posts
        .get_feed_page(FeedRequest { search, page })
        .await?;
    Ok(web::Json(FeedPageResponseBody::from(feed)))
}

/// Create a post with its image and tags.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostRequestBody,
    responses(
        (status = 201, description = "Post created", body = PostResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<PostRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let post = state.posts_command.create_post(draft).await?;
    Ok(HttpResponse::Created().json(PostResponseBody::from(post)))
}

/// Fetch one post with its tags, comments, and image link.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post", body = PostResponseBody),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PostResponseBody>> {
    let id = parse_post_id(&path.into_inner())?;
    let post = state.posts.get_post(id).await?;
    Ok(web::Json(PostResponseBody::from(post)))
}

/// Replace a post's content, image, and tags.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = PostRequestBody,
    responses(
        (status = 200, description = "Post updated", body = PostResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "updatePost"
)]
#[put("/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PostRequestBody>,
) -> ApiResult<web::Json<PostResponseBody>> {
    let id = parse_post_id(&path.into_inner())?;
    let draft = payload.into_inner().into_draft()?;
    let post = state.posts_command.update_post(id, draft).await?;
    Ok(web::Json(PostResponseBody::from(post)))
}

/// Delete a post with its comments, tag bindings, and image.
///
/// Deleting an unknown post succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Invalid id", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_post_id(&path.into_inner())?;
    state.posts_command.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Like or unlike a post.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/like",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = LikeRequestBody,
    responses(
        (status = 200, description = "Post after the change", body = PostResponseBody),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "likePost"
)]
#[post("/posts/{id}/like")]
pub async fn like_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<LikeRequestBody>,
) -> ApiResult<web::Json<PostResponseBody>> {
    let id = parse_post_id(&path.into_inner())?;
    let post = state
        .posts_command
        .like_post(id, payload.into_inner().like)
        .await?;
    Ok(web::Json(PostResponseBody::from(post)))
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
