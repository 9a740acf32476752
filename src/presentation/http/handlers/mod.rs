pub mod engagements;
pub mod health;
pub mod trending;
