pub mod comment;
pub mod engagement;
pub mod post;
pub mod shared;
pub mod trending;
