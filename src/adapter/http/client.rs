//! HTTP Client Abstractions
//!
//! クライアントの抽象化と reqwest による実装

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info, trace};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client, Method, Request};
use serde_json::Value;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use super::models::{Auth, HttpError, HttpResponse, RequestOptions};

const APPLICATION_JSON: &str = "application/json";
const OCTET_STREAM: &str = "application/octet-stream";

/// Trait for the two HTTP operations the uploader needs
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a JSON request against `base_url` joined with `relative_path`.
    /// Any response the transport delivers resolves successfully, whatever its status.
    async fn request(
        &self,
        base_url: &str,
        relative_path: &str,
        options: RequestOptions,
        method: Method,
    ) -> Result<HttpResponse>;

    /// Stream a local file to a pre-signed object storage URL via PUT
    async fn upload_to_s3(&self, signed_url: &str, file_path: &Path) -> Result<HttpResponse>;
}

/// Join a base URL and a relative path with exactly one `/` between them
pub fn join_url(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');

    if relative.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        format!("/{}", relative)
    } else {
        format!("{}/{}", base, relative)
    }
}

/// Parse a response body as JSON, keeping non-JSON text as a string
pub fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

// reqwest's `form()` keeps an existing content type, so a form body skips the JSON one
fn default_headers(options: &RequestOptions) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if options.form.is_none() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    }
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers
}

/// reqwest based client
///
/// TLS certificate verification is disabled for every outbound call.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(HttpError::Client)?;
        Ok(Self { client })
    }

    /// Build a JSON request: default headers first, then the caller's options on top
    pub fn build_request(
        &self,
        base_url: &str,
        relative_path: &str,
        options: &RequestOptions,
        method: Method,
    ) -> Result<Request, HttpError> {
        let url = join_url(base_url, relative_path);
        let mut builder = self.client.request(method, &url).headers(default_headers(options));

        builder = match &options.auth {
            Some(Auth::Basic { username, password }) => builder.basic_auth(username, Some(password)),
            Some(Auth::Bearer(token)) => builder.bearer_auth(token),
            None => builder,
        };

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(form) = &options.form {
            builder = builder.form(form);
        }
        if let Some(json) = &options.json {
            builder = builder.json(json);
        }

        Ok(builder.build()?)
    }

    /// Build the PUT request streaming `file_path` with an explicit content length
    pub async fn build_upload_request(
        &self,
        signed_url: &str,
        file_path: &Path,
    ) -> Result<Request, HttpError> {
        let stat_error = |source: std::io::Error| HttpError::FileStat {
            path: file_path.display().to_string(),
            source,
        };

        let size = tokio::fs::metadata(file_path).await.map_err(stat_error)?.len();
        let file = tokio::fs::File::open(file_path).await.map_err(stat_error)?;

        let request = self
            .client
            .put(signed_url)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_LENGTH, size)
            .body(Body::from(file))
            .build()?;

        Ok(request)
    }

    async fn send(&self, request: Request) -> Result<HttpResponse, HttpError> {
        let method = request.method().clone();
        let request_url = request.url().to_string();

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("{} {} failed: {}", method, request_url, e);
                return Err(e.into());
            }
        };

        let status = response.status().as_u16();
        info!("{} {} {}.", method, response.url(), status);

        let text = response.text().await.inspect_err(|e| error!("{}", e))?;
        let response = HttpResponse {
            status,
            body: parse_body(text),
            request_url,
        };
        trace!("RESPONSE:\n{:?}", response);

        Ok(response)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(
        &self,
        base_url: &str,
        relative_path: &str,
        options: RequestOptions,
        method: Method,
    ) -> Result<HttpResponse> {
        let request = self
            .build_request(base_url, relative_path, &options, method)
            .inspect_err(|e| error!("{}", e))?;
        trace!(
            "REQUEST:\n{} {} query={:?}",
            request.method(),
            request.url(),
            options.query
        );

        Ok(self.send(request).await?)
    }

    async fn upload_to_s3(&self, signed_url: &str, file_path: &Path) -> Result<HttpResponse> {
        let request = self
            .build_upload_request(signed_url, file_path)
            .await
            .inspect_err(|e| error!("{}", e))?;
        trace!("REQUEST:\nPUT {} file={}", request.url(), file_path.display());

        Ok(self.send(request).await?)
    }
}
