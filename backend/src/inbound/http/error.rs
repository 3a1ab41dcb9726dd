//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! return it directly as a JSON response with a matching status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace internal details with a generic message, keeping the trace id.
fn redact_if_internal(error: &Error) -> Error {
    if !matches!(error.code(), ErrorCode::InternalError) {
        return error.clone();
    }
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => error!(message = self.message(), "request failed"),
            ErrorCode::ServiceUnavailable => warn!(message = self.message(), "store unavailable"),
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Largest accepted JSON body. Post images travel inline as base64.
pub const MAX_JSON_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// JSON extractor settings that report malformed bodies as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejected JSON body");
            Error::invalid_request(format!("invalid JSON body: {err}")).into()
        })
}

/// Query extractor settings that report malformed query strings as domain
/// errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected query string");
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

#[cfg(test)]
mod tests;
