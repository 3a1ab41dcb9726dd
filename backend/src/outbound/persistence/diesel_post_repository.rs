//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::Window;

use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{PostContent, PostId, PostRecord};

use super::diesel_basic_error_mapping::{
    affected_rows, map_diesel_error, map_pool_error, row_count,
};
use super::models::{NewPostRow, PostRow, PostTextUpdate};
use super::pool::DbPool;
use super::schema::{posts, posts_tags, tags};

/// Diesel-backed post store.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: PostRow) -> Result<PostRecord, PostRepositoryError> {
    let PostRow {
        id,
        title,
        text,
        likes_count,
    } = row;
    let content = PostContent::new(title, text)
        .map_err(|err| PostRepositoryError::query(format!("post {id}: {err}")))?;
    let likes_count = u32::try_from(likes_count).map_err(|_| {
        PostRepositoryError::query(format!("post {id}: negative likes count {likes_count}"))
    })?;
    Ok(PostRecord {
        id: PostId::new(id),
        content,
        likes_count,
    })
}

fn window_bounds(window: Window) -> Result<(i64, i64), PostRepositoryError> {
    let offset = i64::try_from(window.offset).map_err(|_| {
        PostRepositoryError::query(format!("page offset {} out of range", window.offset))
    })?;
    Ok((offset, i64::from(window.limit)))
}

fn into_records(rows: Vec<PostRow>) -> Result<Vec<PostRecord>, PostRepositoryError> {
    rows.into_iter().map(row_to_record).collect()
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn list(&self, window: Window) -> Result<Vec<PostRecord>, PostRepositoryError> {
        let (offset, limit) = window_bounds(window)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostRow> = posts::table
            .order(posts::id.desc())
            .offset(offset)
            .limit(limit)
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        into_records(rows)
    }

    async fn list_by_tag(
        &self,
        tag: &str,
        window: Window,
    ) -> Result<Vec<PostRecord>, PostRepositoryError> {
        let (offset, limit) = window_bounds(window)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let tagged_posts = posts_tags::table
            .inner_join(tags::table)
            .filter(tags::name.eq(tag))
            .select(posts_tags::post_id);

        let rows: Vec<PostRow> = posts::table
            .filter(posts::id.eq_any(tagged_posts))
            .order(posts::id.desc())
            .offset(offset)
            .limit(limit)
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        into_records(rows)
    }

    async fn count_all(&self) -> Result<Option<u64>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: Option<i64> = posts::table
            .count()
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        count.map(row_count).transpose()
    }

    async fn count_by_tag(&self, tag: &str) -> Result<Option<u64>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: Option<i64> = posts_tags::table
            .inner_join(tags::table)
            .filter(tags::name.eq(tag))
            .count()
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        count.map(row_count).transpose()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = posts::table
            .find(id.as_i64())
            .select(PostRow::as_select())
            .first::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn insert(&self, content: &PostContent) -> Result<PostId, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(posts::table)
            .values(&NewPostRow {
                title: content.title(),
                text: content.text(),
            })
            .returning(posts::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(PostId::new(id))
    }

    async fn update_title_text(
        &self,
        id: PostId,
        content: &PostContent,
    ) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(posts::table.find(id.as_i64()))
            .set(&PostTextUpdate {
                title: content.title(),
                text: content.text(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn increment_likes(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(posts::table.find(id.as_i64()))
            .set(posts::likes_count.eq(posts::likes_count + 1))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn decrement_likes_if_positive(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(
            posts::table
                .filter(posts::id.eq(id.as_i64()))
                .filter(posts::likes_count.gt(0)),
        )
        .set(posts::likes_count.eq(posts::likes_count - 1))
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: PostId) -> Result<u64, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(posts::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        affected_rows(deleted)
    }
}
