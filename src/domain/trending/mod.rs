pub mod ranker;
pub mod repository;
pub mod window;
