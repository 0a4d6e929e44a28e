//! # AccessToken Value Object
//!
//! OAuth2 password grant で取得したアクセストークン

use std::fmt;

/// アクセストークン
///
/// 1回の起動につき1度だけ取得し、永続化もリフレッシュもしない。
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Bearer認証に使う生の値
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// トークンをログに出さない
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
