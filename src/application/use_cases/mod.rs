//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadTestProjectUseCase**: テストプロジェクトのアップロードと通知

pub mod upload_test_project;
