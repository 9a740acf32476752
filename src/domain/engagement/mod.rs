pub mod errors;
pub mod reaction;
pub mod repository;
pub mod toggle;
