pub mod sqlx_activity_service;
pub mod traits;
