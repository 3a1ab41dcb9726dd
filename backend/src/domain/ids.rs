//! Store-assigned numeric identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier issued by the store.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw identifier as stored.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id! {
    /// Identifier of a post.
    PostId
}

define_id! {
    /// Identifier of a tag in the shared vocabulary.
    TagId
}

define_id! {
    /// Identifier of a comment.
    CommentId
}

define_id! {
    /// Identifier of a stored image.
    ImageId
}
