//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` error whose details name the
//! offending field and a stable validation code.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use pagination::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    BlankField,
    InvalidId,
    InvalidPageParameter,
    InvalidBase64,
    TooLong,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::BlankField => "blank_field",
            Self::InvalidId => "invalid_id",
            Self::InvalidPageParameter => "invalid_page_parameter",
            Self::InvalidBase64 => "invalid_base64",
            Self::TooLong => "too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(
    field: FieldName,
    code: ValidationCode,
    message: String,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::BlankField,
        format!("{name} must not be blank"),
    )
}

pub(crate) fn too_long_field_error(field: FieldName, max_chars: usize) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be at most {max_chars} characters")).with_details(
        json!({
            "field": name,
            "code": ValidationCode::TooLong.as_str(),
            "maxLength": max_chars,
        }),
    )
}

/// Parse a positive numeric identifier taken from the request path.
pub(crate) fn parse_id(value: &str, field: FieldName) -> Result<i64, Error> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(field_value_error(
            field,
            ValidationCode::InvalidId,
            format!("{} must be a positive integer", field.as_str()),
            value,
        )),
    }
}

fn parse_page_param(value: Option<&str>, field: FieldName, default: u32) -> Result<u32, Error> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(field_value_error(
            field,
            ValidationCode::InvalidPageParameter,
            format!("{} must be a positive integer", field.as_str()),
            raw,
        )),
    }
}

/// Build a page request from optional `pageNumber`/`pageSize` query values.
///
/// Missing values fall back to page 1 of 10.
pub(crate) fn parse_page_request(
    page_number: Option<&str>,
    page_size: Option<&str>,
) -> Result<PageRequest, Error> {
    let number = parse_page_param(
        page_number,
        FieldName::new("pageNumber"),
        DEFAULT_PAGE_NUMBER,
    )?;
    let size = parse_page_param(page_size, FieldName::new("pageSize"), DEFAULT_PAGE_SIZE)?;
    PageRequest::new(number, size).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Decode standard base64 with padding.
pub(crate) fn decode_base64(value: &str, field: FieldName) -> Result<Vec<u8>, Error> {
    STANDARD.decode(value.trim()).map_err(|_| {
        field_error(
            field,
            ValidationCode::InvalidBase64,
            format!("{} must be valid base64", field.as_str()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error
            .details()
            .and_then(|details| details.get(key))
            .and_then(serde_json::Value::as_str)
    }

    #[rstest]
    #[case(None, None, 1, 10)]
    #[case(Some("3"), None, 3, 10)]
    #[case(None, Some("25"), 1, 25)]
    #[case(Some(" 2 "), Some("5"), 2, 5)]
    fn page_request_uses_defaults(
        #[case] number: Option<&str>,
        #[case] size: Option<&str>,
        #[case] expected_number: u32,
        #[case] expected_size: u32,
    ) {
        let request = parse_page_request(number, size).expect("valid page");
        assert_eq!(request.number(), expected_number);
        assert_eq!(request.size(), expected_size);
    }

    #[rstest]
    #[case(Some("0"), None, "pageNumber")]
    #[case(None, Some("0"), "pageSize")]
    #[case(Some("-1"), None, "pageNumber")]
    #[case(None, Some("ten"), "pageSize")]
    fn invalid_page_values_name_the_field(
        #[case] number: Option<&str>,
        #[case] size: Option<&str>,
        #[case] field: &str,
    ) {
        let error = parse_page_request(number, size).expect_err("invalid page");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(detail(&error, "field"), Some(field));
        assert_eq!(detail(&error, "code"), Some("invalid_page_parameter"));
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("0", None)]
    #[case("-4", None)]
    #[case("abc", None)]
    fn ids_must_be_positive(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_id(raw, FieldName::new("id")).ok(), expected);
    }

    #[rstest]
    fn base64_is_decoded() {
        let bytes = decode_base64("aGVsbG8=", FieldName::new("image.data")).expect("valid");
        assert_eq!(bytes, b"hello");
    }

    #[rstest]
    fn too_long_error_reports_the_limit() {
        let error = too_long_field_error(FieldName::new("title"), 255);

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(detail(&error, "code"), Some("too_long"));
        assert_eq!(
            error
                .details()
                .and_then(|details| details.get("maxLength"))
                .and_then(serde_json::Value::as_u64),
            Some(255)
        );
    }

    #[rstest]
    fn invalid_base64_is_rejected() {
        let error = decode_base64("not base64!", FieldName::new("image.data"))
            .expect_err("invalid base64");
        assert_eq!(detail(&error, "code"), Some("invalid_base64"));
    }
}
