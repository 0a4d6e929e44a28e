//! # Upload Test Project Use Case
//!
//! テストプロジェクトのアップロードユースケース
//!
//! トークン取得 → アップロード情報取得 → バイナリアップロード → 通知 を
//! 順番に1回ずつ実行する。どこかで失敗したら残りのステップは実行しない。

use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dto::upload_request::UploadRequest;
use crate::domain::entities::batch_id::BatchId;
use crate::domain::entities::package_update::PackageUpdate;
use crate::domain::repositories::analytics_repository::AnalyticsRepository;

/// アップロードの進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Authenticating,
    FetchingUploadInfo,
    Uploading,
    Notifying,
    Done,
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadStage::Authenticating => "requesting access token",
            UploadStage::FetchingUploadInfo => "fetching upload info",
            UploadStage::Uploading => "uploading file",
            UploadStage::Notifying => "notifying project update",
            UploadStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// アップロード結果のサマリー
#[derive(Debug, Clone)]
pub struct UploadSummary {
    /// アップロードしたローカルファイル
    pub file_path: PathBuf,
    /// 通知に使ったファイル名
    pub file_name: String,
    /// サービス側のアップロード先パス
    pub uploaded_path: String,
    /// 通知に付けたバッチID
    pub batch: BatchId,
    /// オブジェクトストレージのHTTPステータス
    pub upload_status: u16,
    /// 通知のHTTPステータス
    pub notify_status: u16,
}

/// テストプロジェクトアップロードユースケース
pub struct UploadTestProjectUseCase<R: AnalyticsRepository> {
    repository: Arc<R>,
}

impl<R: AnalyticsRepository> UploadTestProjectUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// アップロードを実行
    ///
    /// # Arguments
    ///
    /// * `request` - アップロード要求
    ///
    /// # Errors
    ///
    /// 最初に失敗したステップのエラーを、ステップ名のコンテキスト付きで返す。
    /// リトライやロールバックはしない。
    pub async fn execute(&self, request: &UploadRequest) -> Result<UploadSummary> {
        let stage = enter(UploadStage::Authenticating);
        let token = self
            .repository
            .request_token(&request.email, &request.password)
            .await
            .with_context(|| format!("{} failed", stage))?;

        let stage = enter(UploadStage::FetchingUploadInfo);
        let upload_info = self
            .repository
            .get_upload_info(&token, &request.project_id)
            .await
            .with_context(|| format!("{} failed", stage))?;

        let stage = enter(UploadStage::Uploading);
        let upload_status = self
            .repository
            .upload_file(&upload_info.upload_url, &request.file_path)
            .await
            .with_context(|| format!("{} failed", stage))?;

        let update = PackageUpdate::new(
            &request.project_id,
            BatchId::generate(),
            &request.file_path,
            &upload_info.path,
        );

        let stage = enter(UploadStage::Notifying);
        let notify_status = self
            .repository
            .upload_test_project(&token, &update)
            .await
            .with_context(|| format!("{} failed", stage))?;

        enter(UploadStage::Done);

        Ok(UploadSummary {
            file_path: request.file_path.clone(),
            file_name: update.file_name,
            uploaded_path: update.uploaded_path,
            batch: update.batch,
            upload_status,
            notify_status,
        })
    }
}

fn enter(stage: UploadStage) -> UploadStage {
    debug!("Upload stage: {}", stage);
    stage
}
