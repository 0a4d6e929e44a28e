//! HTTP Request / Response Models
//!
//! リクエストオプションとレスポンスエンベロープ

use serde_json::Value;
use thiserror::Error;

/// 認証方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// HTTP Basic認証
    Basic { username: String, password: String },
    /// Bearerトークン認証
    Bearer(String),
}

/// 呼び出し側が指定するリクエストオプション
///
/// デフォルトのヘッダーの上にマージされる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub auth: Option<Auth>,
    pub query: Vec<(String, String)>,
    /// フォーム（urlencoded）ボディ
    pub form: Option<Vec<(String, String)>>,
    /// JSONボディ
    pub json: Option<Value>,
}

impl RequestOptions {
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.auth = Some(Auth::Basic {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.auth = Some(Auth::Bearer(token.to_string()));
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = Some(form);
        self
    }
}

/// HTTPレスポンスエンベロープ
///
/// ステータスコードに関係なく、トランスポートが返したレスポンスはすべてここに入る。
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
    /// 解決済みのリクエストURL（診断ログ用）
    pub request_url: String,
}

impl HttpResponse {
    /// ボディから文字列フィールドを取り出す
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(Value::as_str)
    }
}

/// HTTPアダプターのエラー
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to stat {path}: {source}")]
    FileStat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
