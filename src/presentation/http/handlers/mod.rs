pub mod discussions;
pub mod health;
pub mod likes;
pub mod me;
pub mod profile_likes;
