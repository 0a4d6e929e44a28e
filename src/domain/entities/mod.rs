//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **AccessToken**: OAuth2で取得したBearerトークン
//! - **UploadInfo**: 署名付きアップロードURLとアップロード先パス
//! - **BatchId**: 通知呼び出しを識別するバッチID
//! - **PackageUpdate**: テストプロジェクト更新通知の内容

pub mod access_token;
pub mod batch_id;
pub mod package_update;
pub mod upload_info;
