//! PostgreSQL-backed `ImageRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ImageRepository, ImageRepositoryError};
use crate::domain::{ImageBlob, ImageId, ImageUpload, PostId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ImageRow, NewImageRow};
use super::pool::DbPool;
use super::schema::images;

/// Diesel-backed image store.
#[derive(Clone)]
pub struct DieselImageRepository {
    pool: DbPool,
}

impl DieselImageRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<ImageRow> for ImageBlob {
    fn from(row: ImageRow) -> Self {
        Self {
            id: ImageId::new(row.id),
            post_id: PostId::new(row.post_id),
            file_name: row.file_name,
            data: row.data,
        }
    }
}

#[async_trait]
impl ImageRepository for DieselImageRepository {
    async fn by_post_id(&self, post_id: PostId) -> Result<Option<ImageBlob>, ImageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = images::table
            .filter(images::post_id.eq(post_id.as_i64()))
            .select(ImageRow::as_select())
            .first::<ImageRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(ImageBlob::from))
    }

    /// Stores nothing and returns `false` when the post already has an image.
    async fn save(
        &self,
        post_id: PostId,
        upload: &ImageUpload,
    ) -> Result<bool, ImageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = diesel::insert_into(images::table)
            .values(&NewImageRow {
                post_id: post_id.as_i64(),
                file_name: &upload.file_name,
                data: &upload.data,
            })
            .on_conflict(images::post_id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted > 0)
    }

    async fn delete(&self, post_id: PostId) -> Result<bool, ImageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(images::table.filter(images::post_id.eq(post_id.as_i64())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
