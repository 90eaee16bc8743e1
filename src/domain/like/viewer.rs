use std::collections::HashSet;

use crate::domain::post::entity::{PostRef, PostType};

/// Posts the current viewer actively likes among the posts on one page
/// render.
///
/// Built once per render from bulk queries, one per post type, instead of
/// one lookup per post. Scoped to the render and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct ViewerLikeSet {
    comments: HashSet<i64>,
    discussions: HashSet<i64>,
}

impl ViewerLikeSet {
    pub fn insert_all(&mut self, post_type: PostType, ids: impl IntoIterator<Item = i64>) {
        let set = match post_type {
            PostType::Comment => &mut self.comments,
            PostType::Discussion => &mut self.discussions,
        };
        set.extend(ids);
    }

    pub fn contains(&self, post: PostRef) -> bool {
        match post.post_type {
            PostType::Comment => self.comments.contains(&post.post_id),
            PostType::Discussion => self.discussions.contains(&post.post_id),
        }
    }

    pub fn len(&self) -> usize {
        self.comments.len() + self.discussions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
