pub mod like;
pub mod post;
pub mod shared;
pub mod user;
