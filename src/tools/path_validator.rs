use crate::error::OrganizeError;
use std::path::Path;

/// 確認路徑存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<(), OrganizeError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(OrganizeError::InvalidPath(path.to_path_buf()))
    }
}

/// 建立資料夾；已存在時不動作，不會覆蓋既有內容
pub fn ensure_directory_exists(path: &Path) -> Result<(), OrganizeError> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| OrganizeError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
