//! Comment domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CommentRepository, CommentsCommand, PostRepository};
use crate::domain::{Comment, CommentId, Error, NewComment, PostId};

/// Comment service implementing [`CommentsCommand`].
pub struct CommentService<P, C> {
    posts: Arc<P>,
    comments: Arc<C>,
}

impl<P, C> Clone for CommentService<P, C> {
    fn clone(&self) -> Self {
        Self {
            posts: Arc::clone(&self.posts),
            comments: Arc::clone(&self.comments),
        }
    }
}

impl<P, C> CommentService<P, C> {
    /// Create the service; `posts` is read to check the parent exists.
    pub fn new(posts: Arc<P>, comments: Arc<C>) -> Self {
        Self { posts, comments }
    }
}

fn comment_not_found(post_id: PostId, comment_id: CommentId) -> Error {
    Error::not_found(format!(
        "comment {comment_id} on post {post_id} was not found"
    ))
}

fn require_text(text: &str) -> Result<(), Error> {
    if text.trim().is_empty() {
        return Err(Error::invalid_request("comment text must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl<P, C> CommentsCommand for CommentService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn add_comment(&self, post_id: PostId, text: String) -> Result<Comment, Error> {
        require_text(&text)?;
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(Error::not_found(format!("post {post_id} was not found")));
        }

        let new_comment = NewComment { post_id, text };
        let id = self.comments.insert(&new_comment).await?;
        info!(%post_id, comment_id = %id, "added comment");
        Ok(Comment {
            id,
            post_id,
            text: new_comment.text,
        })
    }

    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        text: String,
    ) -> Result<Comment, Error> {
        require_text(&text)?;
        let comment = Comment {
            id: comment_id,
            post_id,
            text,
        };
        if !self.comments.update_text(&comment).await? {
            return Err(comment_not_found(post_id, comment_id));
        }
        Ok(comment)
    }

    async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> Result<(), Error> {
        if !self.comments.delete_by_id(comment_id, post_id).await? {
            return Err(comment_not_found(post_id, comment_id));
        }
        info!(%post_id, %comment_id, "deleted comment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        CommentRepositoryError, MockCommentRepository, MockPostRepository,
    };
    use crate::domain::{ErrorCode, PostContent, PostRecord};
    use rstest::rstest;

    fn service(
        posts: MockPostRepository,
        comments: MockCommentRepository,
    ) -> CommentService<MockPostRepository, MockCommentRepository> {
        CommentService::new(Arc::new(posts), Arc::new(comments))
    }

    fn existing_post() -> PostRecord {
        PostRecord {
            id: PostId::new(1),
            content: PostContent::new("Title", "").expect("valid content"),
            likes_count: 0,
        }
    }

    #[tokio::test]
    async fn add_comment_stores_text_for_existing_post() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .return_once(|_| Ok(Some(existing_post())));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_insert()
            .withf(|comment: &NewComment| {
                comment.post_id == PostId::new(1) && comment.text == "nice"
            })
            .times(1)
            .return_once(|_| Ok(CommentId::new(40)));

        let comment = service(posts, comments)
            .add_comment(PostId::new(1), "nice".to_owned())
            .await
            .expect("comment is added");

        assert_eq!(comment.id, CommentId::new(40));
        assert_eq!(comment.text, "nice");
    }

    #[tokio::test]
    async fn add_comment_to_missing_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().return_once(|_| Ok(None));
        let mut comments = MockCommentRepository::new();
        comments.expect_insert().times(0);

        let error = service(posts, comments)
            .add_comment(PostId::new(3), "hello".to_owned())
            .await
            .expect_err("missing post");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case("")]
    #[case("  \n")]
    #[tokio::test]
    async fn blank_comment_text_is_rejected(#[case] text: &str) {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().times(0);

        let error = service(posts, MockCommentRepository::new())
            .add_comment(PostId::new(1), text.to_owned())
            .await
            .expect_err("blank text");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some(ErrorCode::NotFound))]
    #[tokio::test]
    async fn update_comment_reports_missing_rows(
        #[case] updated: bool,
        #[case] expected: Option<ErrorCode>,
    ) {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_update_text()
            .withf(|comment: &Comment| {
                comment.id == CommentId::new(2) && comment.post_id == PostId::new(1)
            })
            .return_once(move |_| Ok(updated));

        let result = service(MockPostRepository::new(), comments)
            .update_comment(PostId::new(1), CommentId::new(2), "edited".to_owned())
            .await;

        assert_eq!(result.err().map(|error| error.code()), expected);
    }

    #[tokio::test]
    async fn delete_comment_from_other_post_is_not_found() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_delete_by_id()
            .withf(|id, post_id| *id == CommentId::new(2) && *post_id == PostId::new(9))
            .return_once(|_, _| Ok(false));

        let error = service(MockPostRepository::new(), comments)
            .delete_comment(PostId::new(9), CommentId::new(2))
            .await
            .expect_err("comment belongs elsewhere");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "comment 2 on post 9 was not found");
    }

    #[tokio::test]
    async fn query_failure_is_internal() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_delete_by_id()
            .return_once(|_, _| Err(CommentRepositoryError::query("deadlock")));

        let error = service(MockPostRepository::new(), comments)
            .delete_comment(PostId::new(1), CommentId::new(1))
            .await
            .expect_err("query failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
