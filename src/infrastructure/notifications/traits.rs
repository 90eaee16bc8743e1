use async_trait::async_trait;
use uuid::Uuid;

/// Outbound "Like" activity handed to the notification collaborator.
#[derive(Debug, Clone)]
pub struct LikeActivity {
    pub actor_id: Uuid,
    pub recipient_id: Uuid,
    /// Route the recipient follows from the notification.
    pub route: String,
    pub metadata: serde_json::Value,
}

#[async_trait]
pub trait ActivityService: Send + Sync {
    /// Record exactly one activity event for the recipient. Delivery
    /// channels (popup rows, email hand-off) are this collaborator's
    /// concern, not the caller's.
    async fn record_like(&self, activity: LikeActivity) -> anyhow::Result<()>;
}
