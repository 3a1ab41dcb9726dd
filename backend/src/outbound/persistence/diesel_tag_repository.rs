//! PostgreSQL-backed `TagRepository` implementation using Diesel ORM.
//!
//! Inserts rely on the unique `tags.name` index and the `posts_tags` primary
//! key with `ON CONFLICT DO NOTHING`, so repeating a batch is harmless.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TagRepository, TagRepositoryError};
use crate::domain::{PostId, Tag, TagId, TagName};

use super::diesel_basic_error_mapping::{affected_rows, map_diesel_error, map_pool_error};
use super::models::{NewTagRow, PostTagRow, TagRow};
use super::pool::DbPool;
use super::schema::{posts_tags, tags};

/// Diesel-backed tag vocabulary and binding store.
#[derive(Clone)]
pub struct DieselTagRepository {
    pool: DbPool,
}

impl DieselTagRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_tag(row: TagRow) -> Result<Tag, TagRepositoryError> {
    let name = TagName::new(row.name)
        .map_err(|err| TagRepositoryError::query(format!("tag {}: {err}", row.id)))?;
    Ok(Tag {
        id: TagId::new(row.id),
        name,
    })
}

fn into_tags(rows: Vec<TagRow>) -> Result<Vec<Tag>, TagRepositoryError> {
    rows.into_iter().map(row_to_tag).collect()
}

#[async_trait]
impl TagRepository for DieselTagRepository {
    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TagRow> = tags::table
            .inner_join(posts_tags::table)
            .filter(posts_tags::post_id.eq(post_id.as_i64()))
            .order(tags::id.asc())
            .select(TagRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        into_tags(rows)
    }

    async fn insert_if_absent_batch(&self, names: &[TagName]) -> Result<(), TagRepositoryError> {
        if names.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NewTagRow<'_>> = names
            .iter()
            .map(|name| NewTagRow {
                name: name.as_str(),
            })
            .collect();

        diesel::insert_into(tags::table)
            .values(&rows)
            .on_conflict(tags::name)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn tags_by_names(&self, names: &[TagName]) -> Result<Vec<Tag>, TagRepositoryError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_names: Vec<&str> = names.iter().map(TagName::as_str).collect();

        let rows: Vec<TagRow> = tags::table
            .filter(tags::name.eq_any(raw_names))
            .order(tags::id.asc())
            .select(TagRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        into_tags(rows)
    }

    async fn bind_batch(
        &self,
        post_id: PostId,
        tag_ids: &[TagId],
    ) -> Result<(), TagRepositoryError> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostTagRow> = tag_ids
            .iter()
            .map(|tag_id| PostTagRow {
                post_id: post_id.as_i64(),
                tag_id: tag_id.as_i64(),
            })
            .collect();

        diesel::insert_into(posts_tags::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn unbind_all_for_post(&self, post_id: PostId) -> Result<u64, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(posts_tags::table.filter(posts_tags::post_id.eq(post_id.as_i64())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        affected_rows(removed)
    }
}
