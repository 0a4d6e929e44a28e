//! Adapter Layer
//!
//! 外部システム（分析サービス、オブジェクトストレージ、環境変数）との統合

pub mod config;
pub mod http;
pub mod repositories;
