use serde::Serialize;
use ts_rs::TS;

/// Result of one toggle: the actor's new state and the fresh aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ToggleOutcome {
    pub liked: bool,
    pub like_count: i64,
}
