//! # Domain Layer
//!
//! このモジュールはアップロードの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントや設定の読み込み方法について何も知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（AccessToken, UploadInfo, BatchIdなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod repositories;
