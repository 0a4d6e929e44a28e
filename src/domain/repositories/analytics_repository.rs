//! # Analytics Repository Trait
//!
//! 分析サービスとのやり取りを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::access_token::AccessToken;
use crate::domain::entities::package_update::PackageUpdate;
use crate::domain::entities::upload_info::UploadInfo;

/// 分析サービスリポジトリ
///
/// どの操作もリトライやキャッシュをせず、1往復で完了する。
/// 失敗の扱いは呼び出し側の責任。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// アカウントの認証情報でアクセストークンを取得
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合、またはレスポンスにトークンが含まれない場合
    async fn request_token(&self, email: &str, password: &str) -> Result<AccessToken>;

    /// プロジェクトの署名付きアップロードURLを取得
    async fn get_upload_info(&self, token: &AccessToken, project_id: &str) -> Result<UploadInfo>;

    /// ローカルファイルを署名付きURLへアップロードし、HTTPステータスを返す
    async fn upload_file(&self, upload_url: &str, file_path: &Path) -> Result<u16>;

    /// アップロード済みパッケージをプロジェクトに通知し、HTTPステータスを返す
    async fn upload_test_project(&self, token: &AccessToken, update: &PackageUpdate)
        -> Result<u16>;
}
