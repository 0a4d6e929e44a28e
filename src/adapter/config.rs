//! Configuration Store
//!
//! 環境変数から読み込み、CLIの指定で上書きする設定

use log::debug;

pub const ENV_SERVER_URL: &str = "KATALON_SERVER_URL";
pub const ENV_EMAIL: &str = "KATALON_EMAIL";
pub const ENV_API_KEY: &str = "KATALON_API_KEY";

/// アップロードに必要な設定
///
/// 値の検証は行わない。欠けた値は後続のリクエストのエラーとして表面化する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub server_url: Option<String>,
    pub email: Option<String>,
    pub apikey: Option<String>,
    pub project_id: Option<String>,
}

/// CLIから渡される上書き値（`None` は上書きしない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub server_url: Option<String>,
    pub email: Option<String>,
    pub apikey: Option<String>,
    pub project_id: Option<String>,
}

impl Config {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から読み込む
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_url: lookup(ENV_SERVER_URL),
            email: lookup(ENV_EMAIL),
            apikey: lookup(ENV_API_KEY),
            project_id: None,
        }
    }

    /// 指定された値だけを上書きする
    pub fn update(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            server_url,
            email,
            apikey,
            project_id,
        } = overrides;

        apply(&mut self.server_url, server_url, "server_url");
        apply(&mut self.email, email, "email");
        apply(&mut self.apikey, apikey, "apikey");
        apply(&mut self.project_id, project_id, "project_id");
    }
}

fn apply(slot: &mut Option<String>, value: Option<String>, name: &str) {
    if let Some(value) = value {
        debug!("Overriding {} from command line", name);
        *slot = Some(value);
    }
}
