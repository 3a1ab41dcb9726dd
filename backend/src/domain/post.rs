//! Posts and the aggregate assembled around them.

use super::tag::tags_to_text;
use super::{Comment, ImageBlob, PostId, Tag};

/// Number of characters shown for a post in the feed.
pub const TEXT_PREVIEW_CHARS: usize = 300;

/// Longest accepted title, in characters.
pub const MAX_TITLE_CHARS: usize = 255;

/// Validation errors for [`PostContent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    /// The title was blank.
    #[error("post title must not be empty")]
    EmptyTitle,
    /// The title ran past [`MAX_TITLE_CHARS`].
    #[error("post title must be at most {MAX_TITLE_CHARS} characters")]
    TitleTooLong,
}

/// Editable text of a post.
///
/// ## Invariants
/// - `title` is non-empty once trimmed of whitespace.
/// - `title` holds at most [`MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    title: String,
    text: String,
}

impl PostContent {
    /// Validate and construct post content.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::{PostContent, PostValidationError};
    ///
    /// assert!(PostContent::new("Hello", "").is_ok());
    /// assert_eq!(
    ///     PostContent::new("  ", "body"),
    ///     Err(PostValidationError::EmptyTitle)
    /// );
    /// ```
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, PostValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(PostValidationError::TitleTooLong);
        }
        Ok(Self {
            title,
            text: text.into(),
        })
    }

    /// Borrow the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the body text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A post row as held by the post store, without dependents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: PostId,
    pub content: PostContent,
    pub likes_count: u32,
}

/// A post with its tags, comments, and optional image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub text: String,
    pub likes_count: u32,
    pub image: Option<ImageBlob>,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Start an aggregate from a bare record; dependents are attached later.
    pub fn from_record(record: PostRecord) -> Self {
        let PostRecord {
            id,
            content,
            likes_count,
        } = record;
        Self {
            id,
            title: content.title,
            text: content.text,
            likes_count,
            image: None,
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// The first [`TEXT_PREVIEW_CHARS`] characters of the body.
    ///
    /// Counts characters rather than bytes so multi-byte text is never split.
    pub fn text_preview(&self) -> &str {
        match self.text.char_indices().nth(TEXT_PREVIEW_CHARS) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Tag names joined by single spaces, suitable for an edit form.
    pub fn tags_as_text(&self) -> String {
        tags_to_text(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TagId, TagName};
    use rstest::{fixture, rstest};

    #[fixture]
    fn post() -> Post {
        let content = PostContent::new("Title", "body").expect("valid content");
        Post::from_record(PostRecord {
            id: PostId::new(1),
            content,
            likes_count: 3,
        })
    }

    #[rstest]
    #[case(String::new(), PostValidationError::EmptyTitle)]
    #[case(" \t ".to_owned(), PostValidationError::EmptyTitle)]
    #[case("t".repeat(MAX_TITLE_CHARS + 1), PostValidationError::TitleTooLong)]
    fn content_rejects_invalid_titles(
        #[case] title: String,
        #[case] expected: PostValidationError,
    ) {
        assert_eq!(PostContent::new(title, "body"), Err(expected));
    }

    #[rstest]
    fn title_limit_counts_characters_not_bytes() {
        let title = "ж".repeat(MAX_TITLE_CHARS);
        assert!(PostContent::new(title, "").is_ok());
    }

    #[rstest]
    fn from_record_starts_without_dependents(post: Post) {
        assert_eq!(post.likes_count, 3);
        assert!(post.image.is_none());
        assert!(post.tags.is_empty());
        assert!(post.comments.is_empty());
    }

    #[rstest]
    fn short_text_is_previewed_whole(post: Post) {
        assert_eq!(post.text_preview(), "body");
    }

    #[rstest]
    fn long_text_is_cut_at_preview_length(mut post: Post) {
        post.text = "a".repeat(TEXT_PREVIEW_CHARS + 50);
        assert_eq!(post.text_preview().len(), TEXT_PREVIEW_CHARS);
    }

    #[rstest]
    fn preview_counts_characters_not_bytes(mut post: Post) {
        post.text = "ж".repeat(TEXT_PREVIEW_CHARS + 1);
        assert_eq!(post.text_preview().chars().count(), TEXT_PREVIEW_CHARS);
    }

    #[rstest]
    fn tags_as_text_lists_bound_tags(mut post: Post) {
        post.tags = ["news", "rust"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| Tag {
                id: TagId::new(id),
                name: TagName::new(name).expect("valid name"),
            })
            .collect();

        assert_eq!(post.tags_as_text(), "news rust");
    }
}
