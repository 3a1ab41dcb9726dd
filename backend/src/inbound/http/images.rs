//! Image HTTP handler.
//!
//! ```text
//! GET /api/v1/images/{postId}
//! ```

use actix_web::{HttpResponse, get, http::header, web};

use crate::domain::PostId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Serve the raw image bytes attached to a post.
#[utoipa::path(
    get,
    path = "/api/v1/images/{postId}",
    params(("postId" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/jpeg", body = Vec<u8>),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Post has no image", body = ErrorSchema)
    ),
    tags = ["images"],
    operation_id = "getImage"
)]
#[get("/images/{post_id}")]
pub async fn get_image(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_id(&path.into_inner(), FieldName::new("postId")).map(PostId::new)?;
    let image = state.images.image_for_post(post_id).await?;
    Ok(HttpResponse::Ok()
        .content_type(IMAGE_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", image.file_name.replace('"', "")),
        ))
        .body(image.data))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::test as actix_test;

    use crate::domain::{Error, ImageBlob, ImageId, PostId};
    use crate::inbound::http::test_utils::MockPorts;

    #[actix_web::test]
    async fn serves_image_bytes() {
        let mut ports = MockPorts::default();
        ports
            .images
            .expect_image_for_post()
            .withf(|post_id| *post_id == PostId::new(3))
            .return_once(|post_id| {
                Ok(ImageBlob {
                    id: ImageId::new(1),
                    post_id,
                    file_name: "cover.jpg".to_owned(),
                    data: vec![0xFF, 0xD8, 0xFF],
                })
            });
        let app = actix_test::init_service(ports.into_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/images/3")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("image/jpeg")
        );
        let bytes = actix_test::read_body(response).await;
        assert_eq!(bytes.as_ref(), [0xFF, 0xD8, 0xFF]);
    }

    #[actix_web::test]
    async fn missing_image_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .images
            .expect_image_for_post()
            .return_once(|_| Err(Error::not_found("image for post 3 was not found")));
        let app = actix_test::init_service(ports.into_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/images/3")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
