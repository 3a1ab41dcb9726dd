//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentId, NewComment, PostId};

use super::diesel_basic_error_mapping::{affected_rows, map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

/// Diesel-backed comment store.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::new(row.id),
            post_id: PostId::new(row.post_id),
            text: row.text,
        }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn for_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .filter(comments::post_id.eq(post_id.as_i64()))
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, comment: &NewComment) -> Result<CommentId, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(comments::table)
            .values(&NewCommentRow {
                post_id: comment.post_id.as_i64(),
                text: &comment.text,
            })
            .returning(comments::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(CommentId::new(id))
    }

    async fn update_text(&self, comment: &Comment) -> Result<bool, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            comments::table
                .filter(comments::id.eq(comment.id.as_i64()))
                .filter(comments::post_id.eq(comment.post_id.as_i64())),
        )
        .set(comments::text.eq(&comment.text))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_by_id(
        &self,
        id: CommentId,
        post_id: PostId,
    ) -> Result<bool, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            comments::table
                .filter(comments::id.eq(id.as_i64()))
                .filter(comments::post_id.eq(post_id.as_i64())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn delete_all_for_post(&self, post_id: PostId) -> Result<u64, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(comments::table.filter(comments::post_id.eq(post_id.as_i64())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        affected_rows(deleted)
    }
}
