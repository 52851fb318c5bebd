use std::path::PathBuf;
use thiserror::Error;

/// 整理流程的核心錯誤
///
/// 所有錯誤都是終止性的：單次執行不重試，錯誤一律往上回報
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// 不在支援清單中的相機，必須在任何檔案系統存取之前失敗
    #[error("不支援的相機類型: {0}")]
    UnsupportedCamera(String),

    /// 目標路徑不存在或不是資料夾
    #[error("路徑不是有效的資料夾: {}", .0.display())]
    InvalidPath(PathBuf),

    /// 資料夾既不是未分類也不是已分類狀態
    #[error("無法識別資料夾狀態: {}", .0.display())]
    UnrecognizedFolderState(PathBuf),

    /// 目標檔案已存在，絕不靜默覆蓋
    #[error("目標檔案已存在: {}", .0.display())]
    DestinationExists(PathBuf),

    /// 檔案移動失敗，已移動的檔案保持在新位置
    #[error("移動檔案失敗: {} -> {}", .from.display(), .to.display())]
    MoveFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("無法建立資料夾: {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
