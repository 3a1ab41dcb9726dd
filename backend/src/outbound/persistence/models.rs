//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; adapters convert them into
//! domain values before returning.

use diesel::prelude::*;

use super::schema::{comments, images, posts, posts_tags, tags};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub likes_count: i32,
}

/// New posts start with the column default of zero likes.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub title: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
pub(crate) struct PostTextUpdate<'a> {
    pub title: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TagRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tags)]
pub(crate) struct NewTagRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = posts_tags)]
pub(crate) struct PostTagRow {
    pub post_id: i64,
    pub tag_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub post_id: i64,
    pub text: &'a str,
}

#[derive(Clone, Queryable, Selectable)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ImageRow {
    pub id: i64,
    pub post_id: i64,
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = images)]
pub(crate) struct NewImageRow<'a> {
    pub post_id: i64,
    pub file_name: &'a str,
    pub data: &'a [u8],
}
