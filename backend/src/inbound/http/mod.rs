//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod comments;
pub mod error;
pub mod health;
pub mod images;
pub mod posts;
pub mod posts_dto;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Every blog endpoint under `/api/v1`, with extractor settings that keep
/// request errors in the JSON error envelope.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(error::json_config())
        .app_data(error::query_config())
        .service(posts::list_posts)
        .service(posts::create_post)
        .service(posts::get_post)
        .service(posts::update_post)
        .service(posts::delete_post)
        .service(posts::like_post)
        .service(comments::add_comment)
        .service(comments::update_comment)
        .service(comments::delete_comment)
        .service(images::get_image)
}
