use crate::domain::post::entity::PostRef;

/// Like data for one post on a rendered page, before any view formatting.
#[derive(Debug, Clone, Copy)]
pub struct PostReactions {
    pub post: PostRef,
    pub like_count: i64,
    pub liked_by_viewer: bool,
}
