//! # UploadInfo Value Object
//!
//! サービスが発行する署名付きURLとアップロード先パス

/// アップロード情報
///
/// 取得後すぐにバイナリアップロードと通知に使われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadInfo {
    /// オブジェクトストレージの署名付きURL
    pub upload_url: String,
    /// サービス側のアップロード先パス
    pub path: String,
}

impl UploadInfo {
    pub fn new(upload_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            upload_url: upload_url.into(),
            path: path.into(),
        }
    }
}
