//! # BatchId Value Object
//!
//! 通知呼び出しにタグ付けするバッチID（`{unix_millis}-{uuid_v4}`）

use chrono::Utc;
use std::fmt;
use uuid::Uuid;

/// バッチID
///
/// アップロード試行ごとに新しく生成する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchId(String);

impl BatchId {
    /// 現在時刻とランダムなUUIDから新しいバッチIDを生成します。
    ///
    /// 同じミリ秒内に複数回呼ばれてもUUID部分で一意になります。
    ///
    /// # 例
    ///
    /// ```
    /// use kit_uploader::domain::entities::batch_id::BatchId;
    ///
    /// let a = BatchId::generate();
    /// let b = BatchId::generate();
    /// assert_ne!(a, b);
    /// assert!(a.as_str().contains('-'));
    /// ```
    pub fn generate() -> Self {
        Self(format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BatchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
