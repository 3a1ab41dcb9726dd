//! In-process store implementing every store port.
//!
//! Used when no database is configured and by integration tests. Tables live
//! behind one mutex; each port method takes the lock once, so every call is
//! atomic on its own while aggregate sequences stay unsynchronised, matching
//! the PostgreSQL adapters. Foreign keys are enforced the same way the
//! schema enforces them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::Window;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, ImageRepository, ImageRepositoryError,
    PostRepository, PostRepositoryError, StoreError, TagRepository, TagRepositoryError,
};
use crate::domain::{
    Comment, CommentId, ImageBlob, ImageId, ImageUpload, NewComment, PostContent, PostId,
    PostRecord, Tag, TagId, TagName,
};

#[derive(Default)]
struct Tables {
    last_post_id: i64,
    last_tag_id: i64,
    last_comment_id: i64,
    last_image_id: i64,
    posts: BTreeMap<PostId, PostRecord>,
    tags: BTreeMap<TagId, TagName>,
    bindings: BTreeSet<(PostId, TagId)>,
    comments: BTreeMap<CommentId, Comment>,
    images: BTreeMap<PostId, ImageBlob>,
}

fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

fn to_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

fn missing_post<E: StoreError>(post_id: PostId) -> E {
    E::query_failed(format!("referenced post {post_id} does not exist"))
}

impl Tables {
    fn tag_id(&self, name: &str) -> Option<TagId> {
        self.tags
            .iter()
            .find(|(_, tag)| tag.as_str() == name)
            .map(|(id, _)| *id)
    }

    fn newest_first<'a>(
        &'a self,
        filter: impl Fn(&PostId) -> bool + 'a,
    ) -> impl Iterator<Item = &'a PostRecord> + 'a {
        self.posts
            .iter()
            .rev()
            .filter(move |(id, _)| filter(*id))
            .map(|(_, record)| record)
    }

    fn tagged_with(&self, name: &str) -> BTreeSet<PostId> {
        let Some(tag_id) = self.tag_id(name) else {
            return BTreeSet::new();
        };
        self.bindings
            .iter()
            .filter(|(_, bound)| *bound == tag_id)
            .map(|(post_id, _)| *post_id)
            .collect()
    }
}

fn page<'a>(records: impl Iterator<Item = &'a PostRecord>, window: Window) -> Vec<PostRecord> {
    let skip = usize::try_from(window.offset).unwrap_or(usize::MAX);
    let take = usize::try_from(window.limit).unwrap_or(usize::MAX);
    records.skip(skip).take(take).cloned().collect()
}

/// Shared in-memory tables. Clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryBlogStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryBlogStore {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<E: StoreError>(&self) -> Result<MutexGuard<'_, Tables>, E> {
        self.tables
            .lock()
            .map_err(|_| E::query_failed("in-memory store lock poisoned".to_owned()))
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn list(&self, window: Window) -> Result<Vec<PostRecord>, PostRepositoryError> {
        let tables = self.lock::<PostRepositoryError>()?;
        Ok(page(tables.newest_first(|_| true), window))
    }

    async fn list_by_tag(
        &self,
        tag: &str,
        window: Window,
    ) -> Result<Vec<PostRecord>, PostRepositoryError> {
        let tables = self.lock::<PostRepositoryError>()?;
        let tagged = tables.tagged_with(tag);
        Ok(page(tables.newest_first(|id| tagged.contains(id)), window))
    }

    async fn count_all(&self) -> Result<Option<u64>, PostRepositoryError> {
        let tables = self.lock::<PostRepositoryError>()?;
        Ok(Some(to_u64(tables.posts.len())))
    }

    async fn count_by_tag(&self, tag: &str) -> Result<Option<u64>, PostRepositoryError> {
        let tables = self.lock::<PostRepositoryError>()?;
        Ok(Some(to_u64(tables.tagged_with(tag).len())))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostRepositoryError> {
        let tables = self.lock::<PostRepositoryError>()?;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn insert(&self, content: &PostContent) -> Result<PostId, PostRepositoryError> {
        let mut tables = self.lock::<PostRepositoryError>()?;
        let id = PostId::new(next_id(&mut tables.last_post_id));
        tables.posts.insert(
            id,
            PostRecord {
                id,
                content: content.clone(),
                likes_count: 0,
            },
        );
        Ok(id)
    }

    async fn update_title_text(
        &self,
        id: PostId,
        content: &PostContent,
    ) -> Result<(), PostRepositoryError> {
        let mut tables = self.lock::<PostRepositoryError>()?;
        if let Some(record) = tables.posts.get_mut(&id) {
            record.content = content.clone();
        }
        Ok(())
    }

    async fn increment_likes(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut tables = self.lock::<PostRepositoryError>()?;
        if let Some(record) = tables.posts.get_mut(&id) {
            record.likes_count = record.likes_count.saturating_add(1);
        }
        Ok(())
    }

    async fn decrement_likes_if_positive(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut tables = self.lock::<PostRepositoryError>()?;
        if let Some(record) = tables.posts.get_mut(&id) {
            record.likes_count = record.likes_count.saturating_sub(1);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<u64, PostRepositoryError> {
        let mut tables = self.lock::<PostRepositoryError>()?;
        let referenced = tables.bindings.iter().any(|(post_id, _)| *post_id == id)
            || tables.comments.values().any(|comment| comment.post_id == id)
            || tables.images.contains_key(&id);
        if referenced {
            return Err(PostRepositoryError::query(format!(
                "post {id} is still referenced"
            )));
        }
        Ok(u64::from(tables.posts.remove(&id).is_some()))
    }
}

#[async_trait]
impl TagRepository for InMemoryBlogStore {
    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, TagRepositoryError> {
        let tables = self.lock::<TagRepositoryError>()?;
        let tags = tables
            .bindings
            .iter()
            .filter(|(bound, _)| *bound == post_id)
            .filter_map(|(_, tag_id)| {
                tables.tags.get(tag_id).map(|name| Tag {
                    id: *tag_id,
                    name: name.clone(),
                })
            })
            .collect();
        Ok(tags)
    }

    async fn insert_if_absent_batch(&self, names: &[TagName]) -> Result<(), TagRepositoryError> {
        let mut tables = self.lock::<TagRepositoryError>()?;
        for name in names {
            if tables.tag_id(name.as_str()).is_none() {
                let id = TagId::new(next_id(&mut tables.last_tag_id));
                tables.tags.insert(id, name.clone());
            }
        }
        Ok(())
    }

    async fn tags_by_names(&self, names: &[TagName]) -> Result<Vec<Tag>, TagRepositoryError> {
        let tables = self.lock::<TagRepositoryError>()?;
        let tags = tables
            .tags
            .iter()
            .filter(|(_, name)| names.contains(name))
            .map(|(id, name)| Tag {
                id: *id,
                name: name.clone(),
            })
            .collect();
        Ok(tags)
    }

    async fn bind_batch(
        &self,
        post_id: PostId,
        tag_ids: &[TagId],
    ) -> Result<(), TagRepositoryError> {
        let mut tables = self.lock::<TagRepositoryError>()?;
        if !tables.posts.contains_key(&post_id) {
            return Err(missing_post(post_id));
        }
        if let Some(unknown) = tag_ids.iter().find(|id| !tables.tags.contains_key(*id)) {
            return Err(TagRepositoryError::query(format!(
                "referenced tag {unknown} does not exist"
            )));
        }
        tables
            .bindings
            .extend(tag_ids.iter().map(|tag_id| (post_id, *tag_id)));
        Ok(())
    }

    async fn unbind_all_for_post(&self, post_id: PostId) -> Result<u64, TagRepositoryError> {
        let mut tables = self.lock::<TagRepositoryError>()?;
        let before = tables.bindings.len();
        tables.bindings.retain(|(bound, _)| *bound != post_id);
        Ok(to_u64(before - tables.bindings.len()))
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn for_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let tables = self.lock::<CommentRepositoryError>()?;
        Ok(tables
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: &NewComment) -> Result<CommentId, CommentRepositoryError> {
        let mut tables = self.lock::<CommentRepositoryError>()?;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(missing_post(comment.post_id));
        }
        let id = CommentId::new(next_id(&mut tables.last_comment_id));
        tables.comments.insert(
            id,
            Comment {
                id,
                post_id: comment.post_id,
                text: comment.text.clone(),
            },
        );
        Ok(id)
    }

    async fn update_text(&self, comment: &Comment) -> Result<bool, CommentRepositoryError> {
        let mut tables = self.lock::<CommentRepositoryError>()?;
        match tables.comments.get_mut(&comment.id) {
            Some(stored) if stored.post_id == comment.post_id => {
                stored.text.clone_from(&comment.text);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_id(
        &self,
        id: CommentId,
        post_id: PostId,
    ) -> Result<bool, CommentRepositoryError> {
        let mut tables = self.lock::<CommentRepositoryError>()?;
        let belongs = tables
            .comments
            .get(&id)
            .is_some_and(|comment| comment.post_id == post_id);
        if belongs {
            tables.comments.remove(&id);
        }
        Ok(belongs)
    }

    async fn delete_all_for_post(&self, post_id: PostId) -> Result<u64, CommentRepositoryError> {
        let mut tables = self.lock::<CommentRepositoryError>()?;
        let before = tables.comments.len();
        tables.comments.retain(|_, comment| comment.post_id != post_id);
        Ok(to_u64(before - tables.comments.len()))
    }
}

#[async_trait]
impl ImageRepository for InMemoryBlogStore {
    async fn by_post_id(&self, post_id: PostId) -> Result<Option<ImageBlob>, ImageRepositoryError> {
        let tables = self.lock::<ImageRepositoryError>()?;
        Ok(tables.images.get(&post_id).cloned())
    }

    async fn save(
        &self,
        post_id: PostId,
        upload: &ImageUpload,
    ) -> Result<bool, ImageRepositoryError> {
        let mut tables = self.lock::<ImageRepositoryError>()?;
        if !tables.posts.contains_key(&post_id) {
            return Err(missing_post(post_id));
        }
        if tables.images.contains_key(&post_id) {
            return Ok(false);
        }
        let id = ImageId::new(next_id(&mut tables.last_image_id));
        tables.images.insert(
            post_id,
            ImageBlob {
                id,
                post_id,
                file_name: upload.file_name.clone(),
                data: upload.data.clone(),
            },
        );
        Ok(true)
    }

    async fn delete(&self, post_id: PostId) -> Result<bool, ImageRepositoryError> {
        let mut tables = self.lock::<ImageRepositoryError>()?;
        Ok(tables.images.remove(&post_id).is_some())
    }
}
