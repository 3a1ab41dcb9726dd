//! Diesel table definitions for the blog schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Post rows. Tags, comments, and images reference `id`.
    posts (id) {
        id -> Int8,
        title -> Varchar,
        text -> Text,
        /// Never negative; enforced by a CHECK constraint.
        likes_count -> Int4,
    }
}

diesel::table! {
    /// Shared tag vocabulary. `name` is unique and case-sensitive.
    tags (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    /// Post-to-tag bindings; the composite key makes binding idempotent.
    posts_tags (post_id, tag_id) {
        post_id -> Int8,
        tag_id -> Int8,
    }
}

diesel::table! {
    comments (id) {
        id -> Int8,
        post_id -> Int8,
        text -> Text,
    }
}

diesel::table! {
    /// At most one image per post, enforced by a unique `post_id`.
    images (id) {
        id -> Int8,
        post_id -> Int8,
        file_name -> Varchar,
        data -> Bytea,
    }
}

diesel::joinable!(posts_tags -> posts (post_id));
diesel::joinable!(posts_tags -> tags (tag_id));
diesel::joinable!(comments -> posts (post_id));
diesel::joinable!(images -> posts (post_id));

diesel::allow_tables_to_appear_in_same_query!(posts, tags, posts_tags, comments, images);
