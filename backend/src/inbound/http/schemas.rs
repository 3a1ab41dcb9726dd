//! OpenAPI schema definitions for types that live outside this adapter.
//!
//! Domain and pagination types stay framework-agnostic by not deriving
//! `ToSchema`. The wrappers here mirror their serialised shape and register
//! it under the original type name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested post, comment, or image does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "post 7 was not found")]
    message: String,
    /// Correlates the failure with server logs.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level validation context.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`pagination::Paging`].
#[derive(ToSchema)]
#[schema(as = pagination::Paging)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PagingSchema {
    #[schema(example = 1)]
    page_number: u32,
    #[schema(example = 10)]
    page_size: u32,
    has_next: bool,
    has_previous: bool,
}
