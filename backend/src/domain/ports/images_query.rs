//! Driving port for serving post images.

use async_trait::async_trait;

use crate::domain::{Error, ImageBlob, PostId};

/// Driving port for reading a post's image bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImagesQuery: Send + Sync {
    /// The image stored for the post.
    ///
    /// # Errors
    ///
    /// Returns a `not_found` error when the post has no image.
    async fn image_for_post(&self, post_id: PostId) -> Result<ImageBlob, Error>;
}
