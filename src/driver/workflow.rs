//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::client::{HttpClient, ReqwestHttpClient};
use crate::adapter::repositories::katalon_repository::KatalonRepository;
use crate::application::dto::upload_request::UploadRequest;
use crate::application::use_cases::upload_test_project::{UploadSummary, UploadTestProjectUseCase};

use super::cli::{Args, Command, UploadArgs};

/// Upload Workflow
pub struct UploadWorkflow {
    config: Config,
    http_client: Arc<dyn HttpClient>,
}

impl UploadWorkflow {
    /// Create a new workflow backed by the reqwest client
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Arc::new(ReqwestHttpClient::new()?);
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a workflow with an injected HTTP client
    pub fn with_http_client(config: Config, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Execute the command and propagate the first failure
    pub async fn execute(&self, args: Args) -> Result<UploadSummary> {
        match args.command {
            Command::Upload(upload) => self.upload(upload).await,
        }
    }

    /// Execute the command, logging the outcome once.
    /// Returns whether the upload completed.
    pub async fn run(&self, args: Args) -> bool {
        match self.execute(args).await {
            Ok(summary) => {
                info!("Uploaded file: {}", summary.file_path.display());
                true
            }
            Err(e) => {
                error!("{:#}", e);
                false
            }
        }
    }

    async fn upload(&self, args: UploadArgs) -> Result<UploadSummary> {
        // CLI flags win over the environment; read-only from here on
        let mut config = self.config.clone();
        config.update(args.overrides());

        let repository = Arc::new(KatalonRepository::new(
            self.http_client.clone(),
            config.server_url.clone().unwrap_or_default(),
        ));
        let use_case = UploadTestProjectUseCase::new(repository);

        let request = UploadRequest::from_config(&config, args.path);
        let summary = use_case.execute(&request).await?;

        info!(
            "Notified project {} (batch {}, status {})",
            request.project_id, summary.batch, summary.notify_status
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::config::{ENV_API_KEY, ENV_EMAIL, ENV_SERVER_URL};
    use crate::adapter::http::client::MockHttpClient;
    use crate::adapter::http::models::{Auth, HttpResponse, RequestOptions};
    use clap::Parser;
    use mockall::Sequence;
    use reqwest::Method;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::path::Path;

    fn env_config() -> Config {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_SERVER_URL, "https://x.test"),
            (ENV_EMAIL, "a@b.com"),
            (ENV_API_KEY, "k"),
        ]);
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    fn response(status: u16, body: Value) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status,
            body,
            request_url: String::new(),
        })
    }

    fn query_value<'a>(options: &'a RequestOptions, key: &str) -> Option<&'a str> {
        options
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    #[tokio::test]
    async fn test_workflow_end_to_end() {
        let mut mock = MockHttpClient::new();
        let mut seq = Sequence::new();

        mock.expect_request()
            .withf(|base, path, options, method| {
                base == "https://x.test"
                    && path == "/oauth/token"
                    && *method == Method::POST
                    && matches!(options.auth, Some(Auth::Basic { .. }))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| response(200, json!({"access_token": "t1"})));
        mock.expect_request()
            .withf(|_, path, options, method| {
                path == "/api/v1/files/upload-url"
                    && *method == Method::GET
                    && query_value(options, "projectId") == Some("42")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| {
                response(
                    200,
                    json!({"uploadUrl": "https://s3.test/sign", "path": "uploads/project.zip"}),
                )
            });
        mock.expect_upload_to_s3()
            .withf(|url, path| url == "https://s3.test/sign" && path == Path::new("./project.zip"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| response(200, Value::Null));
        mock.expect_request()
            .withf(|base, path, options, method| {
                base == "https://x.test"
                    && path == "/api/v1/test-projects/42/update-package"
                    && *method == Method::POST
                    && options.auth == Some(Auth::Bearer("t1".to_string()))
                    && query_value(options, "fileName") == Some("project.zip")
                    && query_value(options, "uploadedPath") == Some("uploads/project.zip")
                    && query_value(options, "batch").is_some_and(|b| !b.is_empty())
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| response(200, Value::Null));

        let workflow = UploadWorkflow::with_http_client(env_config(), Arc::new(mock));
        let summary = workflow
            .execute(args(&["kit-uploader", "upload", "./project.zip", "-P", "42"]))
            .await
            .unwrap();

        assert_eq!(summary.file_name, "project.zip");
        assert_eq!(summary.uploaded_path, "uploads/project.zip");
    }

    #[tokio::test]
    async fn test_workflow_cli_overrides_server_url() {
        let mut mock = MockHttpClient::new();
        mock.expect_request()
            .withf(|base, _, _, _| base == "https://override.test")
            .times(1)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("connection refused")));

        let workflow = UploadWorkflow::with_http_client(env_config(), Arc::new(mock));
        let completed = workflow
            .run(args(&[
                "kit-uploader",
                "upload",
                "a.zip",
                "--server-url",
                "https://override.test",
            ]))
            .await;

        assert!(!completed);
    }

    #[tokio::test]
    async fn test_workflow_token_failure_makes_no_further_calls() {
        let mut mock = MockHttpClient::new();
        mock.expect_request()
            .times(1)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("dns error")));
        mock.expect_upload_to_s3().never();

        let workflow = UploadWorkflow::with_http_client(env_config(), Arc::new(mock));
        let completed = workflow
            .run(args(&["kit-uploader", "upload", "./project.zip", "-P", "42"]))
            .await;

        assert!(!completed);
    }

    #[tokio::test]
    async fn test_workflow_notify_failure_is_caught() {
        let mut mock = MockHttpClient::new();
        let mut seq = Sequence::new();

        mock.expect_request()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| response(200, json!({"access_token": "t1"})));
        mock.expect_request()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| {
                response(200, json!({"uploadUrl": "https://s3.test/sign", "path": "p"}))
            });
        mock.expect_upload_to_s3()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| response(200, Value::Null));
        mock.expect_request()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("connection reset")));

        let workflow = UploadWorkflow::with_http_client(env_config(), Arc::new(mock));
        let completed = workflow
            .run(args(&["kit-uploader", "upload", "./project.zip", "-P", "42"]))
            .await;

        assert!(!completed);
    }
}
