//! Katalon Analytics Repository Implementation
//!
//! AnalyticsRepositoryのHTTP実装

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::adapter::http::client::HttpClient;
use crate::adapter::http::models::{HttpResponse, RequestOptions};
use crate::domain::entities::access_token::AccessToken;
use crate::domain::entities::package_update::PackageUpdate;
use crate::domain::entities::upload_info::UploadInfo;
use crate::domain::repositories::analytics_repository::AnalyticsRepository;

pub const TOKEN_URI: &str = "/oauth/token";
pub const UPLOAD_URL_URI: &str = "/api/v1/files/upload-url";
pub const TEST_PROJECT_URI: &str = "/api/v1/test-projects";

// OAuth2 client registered for the uploader
pub const OAUTH_CLIENT_ID: &str = "kit_uploader";
pub const OAUTH_CLIENT_SECRET: &str = "kit_uploader";
pub const OAUTH_GRANT_TYPE: &str = "password";

/// レスポンスの内容に関するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("response from {url} (status {status}) has no `{field}` field")]
    MissingField {
        field: &'static str,
        status: u16,
        url: String,
    },
}

fn required_field<'a>(response: &'a HttpResponse, field: &'static str) -> Result<&'a str, ApiError> {
    response.str_field(field).ok_or_else(|| ApiError::MissingField {
        field,
        status: response.status,
        url: response.request_url.clone(),
    })
}

/// 更新通知のパス（`/api/v1/test-projects/{projectId}/update-package`）
pub fn update_package_uri(project_id: &str) -> String {
    format!("{}/{}/update-package", TEST_PROJECT_URI, project_id)
}

/// Katalon Analytics リポジトリ
pub struct KatalonRepository {
    http: Arc<dyn HttpClient>,
    server_url: String,
}

impl KatalonRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `http` - HTTPクライアント
    /// * `server_url` - 分析サービスのベースURL
    pub fn new(http: Arc<dyn HttpClient>, server_url: impl Into<String>) -> Self {
        Self {
            http,
            server_url: server_url.into(),
        }
    }
}

#[async_trait]
impl AnalyticsRepository for KatalonRepository {
    async fn request_token(&self, email: &str, password: &str) -> Result<AccessToken> {
        let options = RequestOptions::default()
            .with_basic_auth(OAUTH_CLIENT_ID, OAUTH_CLIENT_SECRET)
            .with_form(vec![
                ("username".to_string(), email.to_string()),
                ("password".to_string(), password.to_string()),
                ("grant_type".to_string(), OAUTH_GRANT_TYPE.to_string()),
            ]);

        let response = self
            .http
            .request(&self.server_url, TOKEN_URI, options, Method::POST)
            .await?;

        Ok(AccessToken::new(required_field(&response, "access_token")?))
    }

    async fn get_upload_info(&self, token: &AccessToken, project_id: &str) -> Result<UploadInfo> {
        let options = RequestOptions::default()
            .with_bearer(token.as_str())
            .with_query(vec![("projectId".to_string(), project_id.to_string())]);

        let response = self
            .http
            .request(&self.server_url, UPLOAD_URL_URI, options, Method::GET)
            .await?;

        Ok(UploadInfo::new(
            required_field(&response, "uploadUrl")?,
            required_field(&response, "path")?,
        ))
    }

    async fn upload_file(&self, upload_url: &str, file_path: &Path) -> Result<u16> {
        let response = self.http.upload_to_s3(upload_url, file_path).await?;
        Ok(response.status)
    }

    async fn upload_test_project(
        &self,
        token: &AccessToken,
        update: &PackageUpdate,
    ) -> Result<u16> {
        let options = RequestOptions::default()
            .with_bearer(token.as_str())
            .with_query(update.query());

        let response = self
            .http
            .request(
                &self.server_url,
                &update_package_uri(&update.project_id),
                options,
                Method::POST,
            )
            .await?;

        Ok(response.status)
    }
}
