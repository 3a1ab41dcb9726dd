//! Port for post image persistence.

use async_trait::async_trait;

use crate::domain::{ImageBlob, ImageUpload, PostId};

use super::define_store_error;

define_store_error! {
    /// Errors raised by image store adapters.
    ImageRepositoryError {
        connection: "image store connection failed: {message}",
        query: "image store query failed: {message}",
    }
}

/// Port for the single image a post may own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn by_post_id(&self, post_id: PostId) -> Result<Option<ImageBlob>, ImageRepositoryError>;

    /// Store `upload` for the post. Returns `false` when nothing was stored,
    /// for example because the post already has an image.
    async fn save(&self, post_id: PostId, upload: &ImageUpload)
    -> Result<bool, ImageRepositoryError>;

    /// Delete the post's image. Returns `false` when it had none.
    async fn delete(&self, post_id: PostId) -> Result<bool, ImageRepositoryError>;
}
