//! Image domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ImageRepository, ImagesQuery};
use crate::domain::{Error, ImageBlob, PostId};

/// Image service implementing [`ImagesQuery`].
pub struct ImageService<I> {
    images: Arc<I>,
}

impl<I> Clone for ImageService<I> {
    fn clone(&self) -> Self {
        Self {
            images: Arc::clone(&self.images),
        }
    }
}

impl<I> ImageService<I> {
    /// Create the service over an image store.
    pub fn new(images: Arc<I>) -> Self {
        Self { images }
    }
}

#[async_trait]
impl<I> ImagesQuery for ImageService<I>
where
    I: ImageRepository,
{
    async fn image_for_post(&self, post_id: PostId) -> Result<ImageBlob, Error> {
        self.images
            .by_post_id(post_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("image for post {post_id} was not found")))
    }
}
