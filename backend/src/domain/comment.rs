//! Comments attached to a post.

use super::{CommentId, PostId};

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub text: String,
}

/// A comment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: PostId,
    pub text: String,
}
