//! Tags: a shared, lazily grown vocabulary of case-sensitive names.

use std::collections::HashSet;
use std::fmt;

use super::TagId;

/// Longest accepted tag name, in characters.
pub const MAX_TAG_NAME_CHARS: usize = 255;

/// Validation errors for [`TagName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagValidationError {
    /// The name was empty.
    #[error("tag name must not be empty")]
    Empty,
    /// The name contained whitespace, which separates tags in free text.
    #[error("tag name must not contain whitespace")]
    ContainsWhitespace,
    /// The name ran past [`MAX_TAG_NAME_CHARS`].
    #[error("tag name must be at most {MAX_TAG_NAME_CHARS} characters")]
    TooLong,
}

/// A single tag name. Never empty, never contains whitespace, and holds at
/// most [`MAX_TAG_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    /// Validate and construct a tag name.
    pub fn new(name: impl Into<String>) -> Result<Self, TagValidationError> {
        let raw = name.into();
        if raw.is_empty() {
            return Err(TagValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(TagValidationError::ContainsWhitespace);
        }
        if raw.chars().count() > MAX_TAG_NAME_CHARS {
            return Err(TagValidationError::TooLong);
        }
        Ok(Self(raw))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

/// A persisted tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

/// Split free-text tag input into distinct names.
///
/// Tokens are separated by any run of whitespace. Repeated names keep their
/// first position. Blank input yields no names.
///
/// # Examples
/// ```
/// use blog_backend::domain::parse_tag_names;
///
/// let names = parse_tag_names("  rust web rust\tasync ");
/// let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
/// assert_eq!(names, ["rust", "web", "async"]);
/// assert!(parse_tag_names("   ").is_empty());
/// ```
pub fn parse_tag_names(input: &str) -> Vec<TagName> {
    let mut seen = HashSet::new();
    input
        .split_whitespace()
        .filter(|token| seen.insert(*token))
        .map(|token| TagName(token.to_owned()))
        .collect()
}

/// Check every token of free-text tag input against [`TagName`]'s rules.
///
/// # Errors
///
/// Returns the first violation found, in input order.
///
/// # Examples
/// ```
/// use blog_backend::domain::{TagValidationError, check_tag_text};
///
/// assert!(check_tag_text("rust web").is_ok());
/// assert_eq!(
///     check_tag_text(&"x".repeat(256)),
///     Err(TagValidationError::TooLong)
/// );
/// ```
pub fn check_tag_text(input: &str) -> Result<(), TagValidationError> {
    input
        .split_whitespace()
        .try_for_each(|token| TagName::new(token).map(drop))
}

/// Join tag names with single spaces, the inverse of [`parse_tag_names`].
pub fn tags_to_text(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
