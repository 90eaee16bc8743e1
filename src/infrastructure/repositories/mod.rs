pub mod sqlx_like_repository;
pub mod sqlx_post_repository;
pub mod sqlx_user_repository;
