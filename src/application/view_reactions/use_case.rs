use std::sync::Arc;
use uuid::Uuid;

use super::dto::PostReactions;
use crate::domain::{
    like::{repository::LikeStore, viewer::ViewerLikeSet},
    post::{
        entity::{PostRef, PostType},
        repository::PostDirectory,
    },
    shared::errors::DomainError,
};

/// Assembles like data for a discussion page render: the discussion itself
/// plus every comment in it.
pub struct ViewReactionsUseCase {
    store: Arc<dyn LikeStore>,
    posts: Arc<dyn PostDirectory>,
}

impl ViewReactionsUseCase {
    pub fn new(store: Arc<dyn LikeStore>, posts: Arc<dyn PostDirectory>) -> Self {
        Self { store, posts }
    }

    /// One entry per post, discussion first.
    ///
    /// The viewer's own likes are prefetched into a [`ViewerLikeSet`] with
    /// one bulk query per post type; a guest viewer gets an empty set.
    pub async fn for_discussion(
        &self,
        viewer: Option<Uuid>,
        discussion_id: i64,
    ) -> Result<Vec<PostReactions>, DomainError> {
        let discussion = PostRef::new(PostType::Discussion, discussion_id)?;
        if self.posts.owner_of(discussion).await?.is_none() {
            return Err(DomainError::NotFound(format!("discussion {discussion_id}")));
        }
        let comment_ids = self.posts.comment_ids_of(discussion_id).await?;

        let mut viewer_likes = ViewerLikeSet::default();
        if let Some(viewer) = viewer {
            let liked = self
                .store
                .get_liked_post_ids(viewer, PostType::Discussion, &[discussion_id])
                .await?;
            viewer_likes.insert_all(PostType::Discussion, liked);
            let liked = self
                .store
                .get_liked_post_ids(viewer, PostType::Comment, &comment_ids)
                .await?;
            viewer_likes.insert_all(PostType::Comment, liked);
        }

        let mut posts = Vec::with_capacity(comment_ids.len() + 1);
        posts.push(discussion);
        for id in comment_ids {
            posts.push(PostRef::new(PostType::Comment, id)?);
        }

        let mut reactions = Vec::with_capacity(posts.len());
        for post in posts {
            reactions.push(PostReactions {
                post,
                like_count: self.store.get_like_count(post).await?,
                liked_by_viewer: viewer_likes.contains(post),
            });
        }
        Ok(reactions)
    }
}
