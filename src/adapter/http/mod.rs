//! HTTP Adapter Modules
//!
//! 汎用JSONリクエストとバイナリアップロードのためのアダプターモジュール

pub mod client;
pub mod models;
