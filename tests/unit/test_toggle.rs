use async_trait::async_trait;
use mockall::mock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Barrier, Mutex};
use uuid::Uuid;

use reactions_api::application::toggle_like::use_case::ToggleLikeUseCase;
use reactions_api::domain::{
    like::repository::LikeStore,
    post::entity::{PostRef, PostType},
    shared::{errors::DomainError, permissions::PermissionSnapshot},
};

const MEMBER: PermissionSnapshot = PermissionSnapshot {
    can_create_like: true,
    can_view_likes: true,
};
const VIEWER_ONLY: PermissionSnapshot = PermissionSnapshot {
    can_create_like: false,
    can_view_likes: true,
};

mock! {
    Store {}

    #[async_trait]
    impl LikeStore for Store {
        async fn get_like_state(&self, actor_id: Uuid, post: PostRef) -> Result<bool, DomainError>;
        async fn set_like_state(&self, actor_id: Uuid, post: PostRef, liked: bool) -> Result<(), DomainError>;
        async fn get_like_count(&self, post: PostRef) -> Result<i64, DomainError>;
        async fn get_liked_post_ids(&self, actor_id: Uuid, post_type: PostType, post_ids: &[i64]) -> Result<HashSet<i64>, DomainError>;
    }
}

/// In-memory store with the same observable semantics as the SQL one: a
/// single map entry per (actor, post) pair, upsert writes, aggregate reads.
/// An optional barrier holds every reader until all racers have read,
/// reproducing the double-submit interleaving deterministically.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<HashMap<(Uuid, PostType, i64), bool>>,
    read_barrier: Option<Arc<Barrier>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self::default()
    }

    fn with_read_barrier(barrier: Arc<Barrier>) -> Self {
        Self {
            rows: Mutex::default(),
            read_barrier: Some(barrier),
        }
    }

    async fn row_count(&self) -> usize {
        self.rows.lock().await.len()
    }

    async fn stored_state(&self, actor_id: Uuid, post: PostRef) -> Option<bool> {
        self.rows
            .lock()
            .await
            .get(&(actor_id, post.post_type, post.post_id))
            .copied()
    }
}

#[async_trait]
impl LikeStore for MemoryStore {
    async fn get_like_state(&self, actor_id: Uuid, post: PostRef) -> Result<bool, DomainError> {
        let state = self
            .stored_state(actor_id, post)
            .await
            .unwrap_or(false);
        if let Some(barrier) = &self.read_barrier {
            barrier.wait().await;
        }
        Ok(state)
    }

    async fn set_like_state(
        &self,
        actor_id: Uuid,
        post: PostRef,
        liked: bool,
    ) -> Result<(), DomainError> {
        self.rows
            .lock()
            .await
            .insert((actor_id, post.post_type, post.post_id), liked);
        Ok(())
    }

    async fn get_like_count(&self, post: PostRef) -> Result<i64, DomainError> {
        let rows = self.rows.lock().await;
        let count = rows
            .iter()
            .filter(|((_, post_type, post_id), liked)| {
                *post_type == post.post_type && *post_id == post.post_id && **liked
            })
            .count();
        Ok(count as i64)
    }

    async fn get_liked_post_ids(
        &self,
        actor_id: Uuid,
        post_type: PostType,
        post_ids: &[i64],
    ) -> Result<HashSet<i64>, DomainError> {
        let rows = self.rows.lock().await;
        Ok(post_ids
            .iter()
            .copied()
            .filter(|id| {
                rows.get(&(actor_id, post_type, *id))
                    .copied()
                    .unwrap_or(false)
            })
            .collect())
    }
}

#[tokio::test]
async fn toggle_pair_returns_to_the_original_state() {
    let store = Arc::new(MemoryStore::new());
    let use_case = ToggleLikeUseCase::new(store.clone());
    let actor = Uuid::now_v7();
    let post = PostRef::new(PostType::Discussion, 1).unwrap();

    let count_before = store.get_like_count(post).await.unwrap();

    let first = use_case.toggle(actor, MEMBER, post).await.unwrap();
    assert!(first.liked);
    assert_eq!(first.like_count, count_before + 1);

    let second = use_case.toggle(actor, MEMBER, post).await.unwrap();
    assert!(!second.liked);
    assert_eq!(second.like_count, count_before);

    // The retracted like is a kept row, not a deleted one.
    assert_eq!(store.row_count().await, 1);
    assert_eq!(store.stored_state(actor, post).await, Some(false));
}

#[tokio::test]
async fn count_follows_distinct_active_likers() {
    let store = Arc::new(MemoryStore::new());
    let use_case = ToggleLikeUseCase::new(store.clone());
    let post = PostRef::new(PostType::Comment, 9).unwrap();
    let alice = Uuid::now_v7();
    let bob = Uuid::now_v7();

    let outcome = use_case.toggle(alice, MEMBER, post).await.unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.like_count, 1);

    let outcome = use_case.toggle(alice, MEMBER, post).await.unwrap();
    assert!(!outcome.liked);
    assert_eq!(outcome.like_count, 0);

    let outcome = use_case.toggle(bob, MEMBER, post).await.unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.like_count, 1);

    // Bob's like does not disturb Alice's retracted state.
    assert_eq!(store.get_like_state(alice, post).await.unwrap(), false);
    assert_eq!(store.row_count().await, 2);
}

#[tokio::test]
async fn counts_are_scoped_per_post_and_type() {
    let store = Arc::new(MemoryStore::new());
    let use_case = ToggleLikeUseCase::new(store.clone());
    let actor = Uuid::now_v7();
    let comment = PostRef::new(PostType::Comment, 5).unwrap();
    let discussion = PostRef::new(PostType::Discussion, 5).unwrap();

    use_case.toggle(actor, MEMBER, comment).await.unwrap();

    // Same id under another post type is a different post.
    assert_eq!(store.get_like_count(discussion).await.unwrap(), 0);
    assert_eq!(store.get_like_count(comment).await.unwrap(), 1);
}

#[tokio::test]
async fn missing_create_right_denies_before_any_write() {
    let store = Arc::new(MemoryStore::new());
    let use_case = ToggleLikeUseCase::new(store.clone());
    let actor = Uuid::now_v7();
    let post = PostRef::new(PostType::Discussion, 2).unwrap();

    let err = use_case.toggle(actor, VIEWER_ONLY, post).await.unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));
    assert_eq!(store.row_count().await, 0, "denied toggle must not write");
}

#[tokio::test]
async fn read_failure_aborts_before_any_write() {
    let mut store = MockStore::new();
    store
        .expect_get_like_state()
        .returning(|_, _| Err(DomainError::InfrastructureError("connection reset".into())));
    // No set/count expectations: any write after a failed read is a bug.

    let use_case = ToggleLikeUseCase::new(Arc::new(store));
    let post = PostRef::new(PostType::Comment, 3).unwrap();
    let err = use_case
        .toggle(Uuid::now_v7(), MEMBER, post)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InfrastructureError(_)));
}

#[tokio::test]
async fn write_failure_surfaces_and_skips_the_recount() {
    let mut store = MockStore::new();
    store.expect_get_like_state().returning(|_, _| Ok(false));
    store
        .expect_set_like_state()
        .withf(|_, _, liked| *liked)
        .returning(|_, _, _| Err(DomainError::InfrastructureError("upsert failed".into())));
    // get_like_count must not be called after a failed persist.

    let use_case = ToggleLikeUseCase::new(Arc::new(store));
    let post = PostRef::new(PostType::Discussion, 4).unwrap();
    let err = use_case
        .toggle(Uuid::now_v7(), MEMBER, post)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InfrastructureError(_)));
}

#[tokio::test]
async fn concurrent_double_submit_converges_to_a_single_liked_row() {
    // Both racers read before either writes; the upsert semantics must
    // still leave one row in a well-defined state.
    let barrier = Arc::new(Barrier::new(2));
    let store = Arc::new(MemoryStore::with_read_barrier(barrier));
    let use_case = Arc::new(ToggleLikeUseCase::new(store.clone()));
    let actor = Uuid::now_v7();
    let post = PostRef::new(PostType::Discussion, 7).unwrap();

    let first = tokio::spawn({
        let use_case = use_case.clone();
        async move { use_case.toggle(actor, MEMBER, post).await }
    });
    let second = tokio::spawn({
        let use_case = use_case.clone();
        async move { use_case.toggle(actor, MEMBER, post).await }
    });

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert!(first.liked && second.liked);
    assert_eq!(store.row_count().await, 1);
    assert_eq!(store.stored_state(actor, post).await, Some(true));
}
