//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod katalon_repository;
