//! Post images.
//!
//! A post owns at most one image. Image bytes are opaque to the domain; the
//! HTTP adapter serves them back verbatim.

use std::fmt;

use super::{ImageId, PostId};

/// Longest accepted image file name, in characters.
pub const MAX_FILE_NAME_CHARS: usize = 255;

/// Image bytes received from a client, not yet bound to a post.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Image stored for a post.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub id: ImageId,
    pub post_id: PostId,
    pub file_name: String,
    pub data: Vec<u8>,
}

// Byte payloads are elided from debug output so logs stay readable.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBlob")
            .field("id", &self.id)
            .field("post_id", &self.post_id)
            .field("file_name", &self.file_name)
            .field("bytes", &self.data.len())
            .finish()
    }
}
