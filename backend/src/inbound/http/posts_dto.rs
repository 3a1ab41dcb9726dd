//! Request and response bodies for the post and comment endpoints.

use pagination::Paging;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{FeedPage, PostDraft};
use crate::domain::{
    Comment, Error, ImageUpload, MAX_FILE_NAME_CHARS, MAX_TAG_NAME_CHARS, MAX_TITLE_CHARS, Post,
    PostContent, PostValidationError, TagValidationError, check_tag_text,
};
use crate::inbound::http::schemas::PagingSchema;
use crate::inbound::http::validation::{
    FieldName, blank_field_error, decode_base64, too_long_field_error,
};

/// Query string for the feed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub search: Option<String>,
    pub page_size: Option<String>,
    pub page_number: Option<String>,
}

/// Image attached to a post write.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageBody {
    #[schema(example = "cover.jpg")]
    pub file_name: String,
    /// Standard base64 with padding.
    #[schema(format = "byte")]
    pub data: String,
}

/// Body for creating or replacing a post.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostRequestBody {
    #[schema(example = "Release notes")]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Whitespace-separated tag names.
    #[serde(default)]
    #[schema(example = "rust web")]
    pub tags: String,
    pub image: ImageBody,
}

impl PostRequestBody {
    /// Validate the body into a domain draft.
    pub(crate) fn into_draft(self) -> Result<PostDraft, Error> {
        let content = PostContent::new(self.title, self.text).map_err(|err| match err {
            PostValidationError::EmptyTitle => blank_field_error(FieldName::new("title")),
            PostValidationError::TitleTooLong => {
                too_long_field_error(FieldName::new("title"), MAX_TITLE_CHARS)
            }
        })?;
        check_tag_text(&self.tags).map_err(|err| match err {
            TagValidationError::TooLong => {
                too_long_field_error(FieldName::new("tags"), MAX_TAG_NAME_CHARS)
            }
            // Tokens come from splitting on whitespace, so only length can fail.
            TagValidationError::Empty | TagValidationError::ContainsWhitespace => {
                Error::invalid_request(err.to_string())
            }
        })?;
        let file_name = self.image.file_name;
        if file_name.trim().is_empty() {
            return Err(blank_field_error(FieldName::new("image.fileName")));
        }
        if file_name.chars().count() > MAX_FILE_NAME_CHARS {
            return Err(too_long_field_error(
                FieldName::new("image.fileName"),
                MAX_FILE_NAME_CHARS,
            ));
        }
        let data = decode_base64(&self.image.data, FieldName::new("image.data"))?;
        Ok(PostDraft {
            content,
            image: ImageUpload { file_name, data },
            tags: self.tags,
        })
    }
}

/// Body for liking or unliking a post.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct LikeRequestBody {
    /// `true` adds a like, `false` removes one.
    pub like: bool,
}

/// Body for adding or editing a comment.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CommentRequestBody {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseBody {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
}

impl From<Comment> for CommentResponseBody {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.as_i64(),
            post_id: comment.post_id.as_i64(),
            text: comment.text,
        }
    }
}

/// A post with its tags and comments. Image bytes are served separately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponseBody {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// The first 300 characters of `text`.
    pub text_preview: String,
    pub likes_count: u32,
    pub tags: Vec<String>,
    /// Tag names joined by single spaces, ready for an edit form.
    pub tags_text: String,
    pub comments: Vec<CommentResponseBody>,
    /// Where to fetch the image, when the post has one.
    #[schema(example = "/api/v1/images/7")]
    pub image_url: Option<String>,
}

impl From<Post> for PostResponseBody {
    fn from(post: Post) -> Self {
        let text_preview = post.text_preview().to_owned();
        let tags_text = post.tags_as_text();
        let image_url = post
            .image
            .as_ref()
            .map(|image| format!("/api/v1/images/{}", image.post_id));
        Self {
            id: post.id.as_i64(),
            title: post.title,
            text: post.text,
            text_preview,
            likes_count: post.likes_count,
            tags: post
                .tags
                .into_iter()
                .map(|tag| String::from(tag.name))
                .collect(),
            tags_text,
            comments: post
                .comments
                .into_iter()
                .map(CommentResponseBody::from)
                .collect(),
            image_url,
        }
    }
}

/// One page of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedPageResponseBody {
    pub posts: Vec<PostResponseBody>,
    /// Posts matching the filter across all pages.
    pub total_count: u64,
    #[schema(value_type = PagingSchema)]
    pub paging: Paging,
}

impl From<FeedPage> for FeedPageResponseBody {
    fn from(page: FeedPage) -> Self {
        Self {
            posts: page.posts.into_iter().map(PostResponseBody::from).collect(),
            total_count: page.total_count,
            paging: page.paging,
        }
    }
}
