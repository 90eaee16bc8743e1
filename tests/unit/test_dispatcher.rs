use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use uuid::Uuid;

use reactions_api::application::notify_like::dispatcher::NotificationDispatcher;
use reactions_api::domain::post::entity::{PostRef, PostType};
use reactions_api::infrastructure::notifications::traits::{ActivityService, LikeActivity};

mock! {
    Activity {}

    #[async_trait]
    impl ActivityService for Activity {
        async fn record_like(&self, activity: LikeActivity) -> anyhow::Result<()>;
    }
}

#[tokio::test]
async fn fresh_like_notifies_the_post_owner_once() {
    let actor = Uuid::now_v7();
    let owner = Uuid::now_v7();
    let post = PostRef::new(PostType::Discussion, 7).unwrap();

    let mut activity = MockActivity::new();
    activity
        .expect_record_like()
        .withf(move |a| {
            a.actor_id == actor && a.recipient_id == owner && a.route == "/discussion/7"
        })
        .times(1)
        .returning(|_| Ok(()));

    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    dispatcher.like_created(actor, owner, post).await;
}

#[tokio::test]
async fn self_like_never_notifies() {
    let actor = Uuid::now_v7();
    let post = PostRef::new(PostType::Comment, 3).unwrap();

    let mut activity = MockActivity::new();
    activity.expect_record_like().times(0);

    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    dispatcher.like_created(actor, actor, post).await;
}

#[tokio::test]
async fn dispatch_failure_is_swallowed() {
    let actor = Uuid::now_v7();
    let owner = Uuid::now_v7();
    let post = PostRef::new(PostType::Discussion, 1).unwrap();

    let mut activity = MockActivity::new();
    activity
        .expect_record_like()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("activity backend offline")));

    // The like already persisted; a failed notification must not surface.
    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    dispatcher.like_created(actor, owner, post).await;
}

#[tokio::test]
async fn profile_like_reports_the_dispatch_outcome() {
    let actor = Uuid::now_v7();
    let target = Uuid::now_v7();

    let mut activity = MockActivity::new();
    activity
        .expect_record_like()
        .withf(move |a| a.recipient_id == target && a.route == "/profile/alice")
        .times(1)
        .returning(|_| Ok(()));
    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    assert!(
        dispatcher
            .profile_liked(actor, target, "/profile/alice".to_string())
            .await
    );

    let mut activity = MockActivity::new();
    activity
        .expect_record_like()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("activity backend offline")));
    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    assert!(
        !dispatcher
            .profile_liked(actor, target, "/profile/alice".to_string())
            .await
    );
}

#[tokio::test]
async fn self_profile_like_is_dropped() {
    let actor = Uuid::now_v7();

    let mut activity = MockActivity::new();
    activity.expect_record_like().times(0);

    let dispatcher = NotificationDispatcher::new(Arc::new(activity));
    assert!(
        !dispatcher
            .profile_liked(actor, actor, "/profile/self".to_string())
            .await
    );
}
