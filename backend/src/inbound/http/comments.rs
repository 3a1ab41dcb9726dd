//! Comment HTTP handlers.
//!
//! ```text
//! POST   /api/v1/posts/{id}/comments
//! PUT    /api/v1/posts/{id}/comments/{commentId}
//! DELETE /api/v1/posts/{id}/comments/{commentId}
//! ```

use actix_web::{HttpResponse, delete, post, put, web};

use crate::domain::CommentId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::posts::parse_post_id;
use crate::inbound::http::posts_dto::{CommentRequestBody, CommentResponseBody};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

fn parse_comment_id(raw: &str) -> ApiResult<CommentId> {
    parse_id(raw, FieldName::new("commentId")).map(CommentId::new)
}

/// Add a comment to a post.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = CommentRequestBody,
    responses(
        (status = 201, description = "Comment added", body = CommentResponseBody),
        (status = 400, description = "Blank text or invalid id", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "addComment"
)]
#[post("/posts/{id}/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;
    let comment = state
        .comments
        .add_comment(post_id, payload.into_inner().text)
        .await?;
    Ok(HttpResponse::Created().json(CommentResponseBody::from(comment)))
}

/// Replace the text of a comment.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}/comments/{commentId}",
    params(
        ("id" = i64, Path, description = "Post identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    request_body = CommentRequestBody,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponseBody),
        (status = 400, description = "Blank text or invalid id", body = ErrorSchema),
        (status = 404, description = "No such comment on this post", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "updateComment"
)]
#[put("/posts/{id}/comments/{comment_id}")]
pub async fn update_comment(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<web::Json<CommentResponseBody>> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_post_id(&raw_post_id)?;
    let comment_id = parse_comment_id(&raw_comment_id)?;
    let comment = state
        .comments
        .update_comment(post_id, comment_id, payload.into_inner().text)
        .await?;
    Ok(web::Json(CommentResponseBody::from(comment)))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}/comments/{commentId}",
    params(
        ("id" = i64, Path, description = "Post identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "No such comment on this post", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/posts/{id}/comments/{comment_id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_post_id(&raw_post_id)?;
    let comment_id = parse_comment_id(&raw_comment_id)?;
    state.comments.delete_comment(post_id, comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
