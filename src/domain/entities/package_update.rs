//! # PackageUpdate Value Object
//!
//! テストプロジェクトのパッケージ更新通知

use std::path::Path;

use super::batch_id::BatchId;

/// パッケージ更新通知
///
/// アップロード済みファイルをプロジェクトに紐づけるための通知内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUpdate {
    /// 対象プロジェクトID
    pub project_id: String,
    /// バッチID
    pub batch: BatchId,
    /// ローカルファイルのベース名
    pub file_name: String,
    /// サービス側のアップロード先パス
    pub uploaded_path: String,
    /// 追加のクエリパラメータ（固定パラメータより後に適用）
    pub extra_query: Vec<(String, String)>,
}

impl PackageUpdate {
    /// 新しい通知内容を作成
    ///
    /// # Arguments
    ///
    /// * `project_id` - プロジェクトID
    /// * `batch` - バッチID
    /// * `file_path` - ローカルファイルのパス（ベース名のみ使用）
    /// * `uploaded_path` - アップロード先パス
    pub fn new(project_id: &str, batch: BatchId, file_path: &Path, uploaded_path: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            batch,
            file_name: file_name_of(file_path),
            uploaded_path: uploaded_path.to_string(),
            extra_query: Vec::new(),
        }
    }

    /// 追加のクエリパラメータを設定
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_query.push((key.into(), value.into()));
        self
    }

    /// 通知に付けるクエリ文字列を組み立てる
    ///
    /// 追加パラメータが固定パラメータと同じキーを持つ場合はその位置で上書きする。
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("projectId".to_string(), self.project_id.clone()),
            ("batch".to_string(), self.batch.to_string()),
            ("folderPath".to_string(), String::new()),
            ("fileName".to_string(), self.file_name.clone()),
            ("uploadedPath".to_string(), self.uploaded_path.clone()),
        ];

        for (key, value) in &self.extra_query {
            match query.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.clone(),
                None => query.push((key.clone(), value.clone())),
            }
        }

        query
    }
}

/// パスのベース名を返す（取得できない場合はパス全体）
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
