//! Tests for the post service.

use std::sync::Arc;

use pagination::{PageRequest, Window};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockCommentRepository, MockImageRepository, MockPostRepository, MockTagRepository,
    PostRepositoryError,
};
use crate::domain::{ErrorCode, ImageUpload, PostContent, PostRecord, Tag, TagId, TagName};

type Service = PostAggregateService<
    MockPostRepository,
    MockTagRepository,
    MockCommentRepository,
    MockImageRepository,
>;

#[derive(Default)]
struct Mocks {
    posts: MockPostRepository,
    tags: MockTagRepository,
    comments: MockCommentRepository,
    images: MockImageRepository,
}

impl Mocks {
    fn without_dependents(mut self) -> Self {
        self.tags.expect_tags_for_post().returning(|_| Ok(Vec::new()));
        self.comments.expect_for_post().returning(|_| Ok(Vec::new()));
        self.images.expect_by_post_id().returning(|_| Ok(None));
        self
    }

    fn into_service(self) -> Service {
        PostAggregateService::new(
            Arc::new(self.posts),
            Arc::new(self.tags),
            Arc::new(self.comments),
            Arc::new(self.images),
        )
    }
}

#[fixture]
fn mocks() -> Mocks {
    Mocks::default()
}

fn records(ids: impl IntoIterator<Item = i64>) -> Vec<PostRecord> {
    ids.into_iter()
        .map(|id| PostRecord {
            id: PostId::new(id),
            content: PostContent::new(format!("Post {id}"), "text").expect("valid content"),
            likes_count: 0,
        })
        .collect()
}

fn feed(search: Option<&str>, number: u32, size: u32) -> FeedRequest {
    FeedRequest {
        search: search.map(str::to_owned),
        page: PageRequest::new(number, size).expect("valid page"),
    }
}

fn draft(tags: &str) -> PostDraft {
    PostDraft {
        content: PostContent::new("Title", "Body").expect("valid content"),
        image: ImageUpload {
            file_name: "photo.jpg".to_owned(),
            data: vec![9, 9],
        },
        tags: tags.to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn unfiltered_feed_reads_window_and_total(mocks: Mocks) {
    let mut mocks = mocks.without_dependents();
    mocks
        .posts
        .expect_list()
        .withf(|window| {
            *window
                == Window {
                    offset: 10,
                    limit: 10,
                }
        })
        .times(1)
        .return_once(|_| Ok(records(11..=20)));
    mocks
        .posts
        .expect_count_all()
        .times(1)
        .return_once(|| Ok(Some(25)));
    mocks.posts.expect_list_by_tag().times(0);

    let page = mocks
        .into_service()
        .get_feed_page(feed(None, 2, 10))
        .await
        .expect("feed loads");

    assert_eq!(page.posts.len(), 10);
    assert_eq!(page.total_count, 25);
    assert!(page.paging.has_next);
    assert!(page.paging.has_previous);
    assert_eq!(page.paging.page_number, 2);
}

#[rstest]
#[tokio::test]
async fn tag_filtered_feed_uses_tag_queries(mocks: Mocks) {
    let mut mocks = mocks.without_dependents();
    mocks
        .posts
        .expect_list_by_tag()
        .withf(|tag, window| tag == "rust" && window.offset == 0)
        .times(1)
        .return_once(|_, _| Ok(records([3, 1])));
    mocks
        .posts
        .expect_count_by_tag()
        .withf(|tag| tag == "rust")
        .times(1)
        .return_once(|_| Ok(Some(2)));
    mocks.posts.expect_list().times(0);
    mocks.posts.expect_count_all().times(0);

    let page = mocks
        .into_service()
        .get_feed_page(feed(Some(" rust "), 1, 10))
        .await
        .expect("feed loads");

    let ids: Vec<_> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![PostId::new(3), PostId::new(1)]);
    assert_eq!(page.total_count, 2);
    assert!(!page.paging.has_next);
    assert!(!page.paging.has_previous);
}

#[rstest]
#[tokio::test]
async fn blank_search_reads_every_post(mut mocks: Mocks) {
    mocks.posts.expect_list().return_once(|_| Ok(Vec::new()));
    mocks.posts.expect_count_all().return_once(|| Ok(Some(0)));
    mocks.posts.expect_list_by_tag().times(0);

    let page = mocks
        .into_service()
        .get_feed_page(feed(Some("   "), 1, 10))
        .await
        .expect("feed loads");

    assert!(page.posts.is_empty());
}

#[rstest]
#[tokio::test]
async fn missing_count_is_treated_as_zero(mut mocks: Mocks) {
    mocks.posts.expect_list_by_tag().return_once(|_, _| Ok(Vec::new()));
    mocks.posts.expect_count_by_tag().return_once(|_| Ok(None));

    let page = mocks
        .into_service()
        .get_feed_page(feed(Some("unknown"), 1, 5))
        .await
        .expect("feed loads");

    assert_eq!(page.total_count, 0);
    assert!(!page.paging.has_next);
    assert!(!page.paging.has_previous);
}

#[rstest]
#[tokio::test]
async fn feed_posts_carry_their_tags(mut mocks: Mocks) {
    mocks.posts.expect_list().return_once(|_| Ok(records([4])));
    mocks.posts.expect_count_all().return_once(|| Ok(Some(1)));
    mocks.tags.expect_tags_for_post().return_once(|_| {
        Ok(vec![Tag {
            id: TagId::new(1),
            name: TagName::new("news").expect("valid tag"),
        }])
    });
    mocks.comments.expect_for_post().return_once(|_| Ok(Vec::new()));
    mocks.images.expect_by_post_id().return_once(|_| Ok(None));

    let page = mocks
        .into_service()
        .get_feed_page(FeedRequest::default())
        .await
        .expect("feed loads");

    assert_eq!(page.posts[0].tags_as_text(), "news");
}

#[rstest]
#[tokio::test]
async fn storage_outage_surfaces_as_service_unavailable(mut mocks: Mocks) {
    mocks
        .posts
        .expect_list()
        .return_once(|_| Err(PostRepositoryError::connection("pool exhausted")));

    let error = mocks
        .into_service()
        .get_feed_page(FeedRequest::default())
        .await
        .expect_err("outage propagates");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn create_post_passes_draft_through(mut mocks: Mocks) {
    mocks
        .posts
        .expect_insert()
        .withf(|content: &PostContent| content.title() == "Title" && content.text() == "Body")
        .return_once(|_| Ok(PostId::new(12)));
    mocks
        .images
        .expect_save()
        .withf(|_, image: &ImageUpload| image.data == [9, 9])
        .return_once(|_, _| Ok(false));
    mocks.tags.expect_insert_if_absent_batch().times(0);

    let post = mocks
        .into_service()
        .create_post(draft(""))
        .await
        .expect("post is created");

    assert_eq!(post.id, PostId::new(12));
    assert!(post.image.is_none());
}

#[rstest]
#[tokio::test]
async fn oversized_tag_is_rejected_before_any_write(mut mocks: Mocks) {
    mocks.posts.expect_insert().times(0);
    mocks.images.expect_save().times(0);
    mocks.tags.expect_insert_if_absent_batch().times(0);
    let tags = format!("fine {}", "t".repeat(crate::domain::MAX_TAG_NAME_CHARS + 1));

    let error = mocks
        .into_service()
        .create_post(draft(&tags))
        .await
        .expect_err("oversized tag");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn oversized_file_name_is_rejected_before_any_write(mut mocks: Mocks) {
    mocks.posts.expect_find_by_id().times(0);
    mocks.posts.expect_update_title_text().times(0);
    mocks.images.expect_save().times(0);
    let mut oversized = draft("a b");
    oversized.image.file_name = "f".repeat(MAX_FILE_NAME_CHARS + 1);

    let error = mocks
        .into_service()
        .update_post(PostId::new(3), oversized)
        .await
        .expect_err("oversized file name");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_post_is_not_found(mut mocks: Mocks) {
    mocks.posts.expect_find_by_id().return_once(|_| Ok(None));
    mocks.posts.expect_update_title_text().times(0);

    let error = mocks
        .into_service()
        .update_post(PostId::new(77), draft("a b"))
        .await
        .expect_err("missing post");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn unlike_at_zero_keeps_counter(mocks: Mocks) {
    let mut mocks = mocks.without_dependents();
    mocks
        .posts
        .expect_decrement_likes_if_positive()
        .times(1)
        .return_once(|_| Ok(()));
    mocks
        .posts
        .expect_find_by_id()
        .return_once(|_| Ok(records([1]).pop()));

    let post = mocks
        .into_service()
        .like_post(PostId::new(1), false)
        .await
        .expect("unlike applies");

    assert_eq!(post.likes_count, 0);
}
