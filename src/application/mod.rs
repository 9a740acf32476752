pub mod engagement;
pub mod trending;
