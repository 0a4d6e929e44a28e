//! # Upload Request DTO
//!
//! アップロード要求のData Transfer Object

use std::path::PathBuf;

use crate::adapter::config::Config;

/// アップロード要求
///
/// マージ済みの設定とローカルファイルのパスから組み立てる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// アカウントのメールアドレス
    pub email: String,
    /// APIキー（password grant のパスワードとして送る）
    pub password: String,
    /// 対象プロジェクトID
    pub project_id: String,
    /// アップロードするローカルファイル
    pub file_path: PathBuf,
}

impl UploadRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        project_id: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            project_id: project_id.into(),
            file_path: file_path.into(),
        }
    }

    /// 設定から要求を組み立てます。
    ///
    /// 欠けている値は空文字列になり、検証はしません。
    ///
    /// ```
    /// use kit_uploader::adapter::config::Config;
    /// use kit_uploader::application::dto::upload_request::UploadRequest;
    ///
    /// let config = Config {
    ///     server_url: Some("https://x.test".to_string()),
    ///     email: Some("a@b.com".to_string()),
    ///     apikey: Some("k".to_string()),
    ///     project_id: Some("42".to_string()),
    /// };
    ///
    /// let request = UploadRequest::from_config(&config, "./project.zip");
    /// assert_eq!(request.email, "a@b.com");
    /// assert_eq!(request.password, "k");
    /// assert_eq!(request.project_id, "42");
    /// ```
    pub fn from_config(config: &Config, file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            config.email.clone().unwrap_or_default(),
            config.apikey.clone().unwrap_or_default(),
            config.project_id.clone().unwrap_or_default(),
            file_path,
        )
    }
}
