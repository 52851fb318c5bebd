use crate::error::OrganizeError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 單筆移動紀錄（dry-run 模式下為計畫中的移動）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// 移動單一檔案，保留原檔名
///
/// 目標已存在時回傳 `DestinationExists`，絕不覆蓋。同一磁碟區內使用
/// 原子性的 rename；rename 失敗（通常是跨檔案系統）時改用複製後刪除。
pub fn move_file(source: &Path, target: &Path) -> Result<(), OrganizeError> {
    if target.exists() {
        return Err(OrganizeError::DestinationExists(target.to_path_buf()));
    }

    match fs::rename(source, target) {
        Ok(()) => {
            debug!("移動檔案: {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(rename_err) => match copy_and_delete(source, target) {
            Ok(()) => {
                debug!(
                    "移動檔案（複製後刪除）: {} -> {}",
                    source.display(),
                    target.display()
                );
                Ok(())
            }
            Err(copy_err) => {
                warn!(
                    "移動檔案失敗 {}: {copy_err} (原始錯誤: {rename_err})",
                    source.display()
                );
                Err(OrganizeError::MoveFailure {
                    from: source.to_path_buf(),
                    to: target.to_path_buf(),
                    source: rename_err,
                })
            }
        },
    }
}

/// 複製檔案後刪除原檔案
fn copy_and_delete(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::copy(source, target)?;
    fs::remove_file(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_file_preserves_name_and_content() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("DSC001.arw");
        let target_dir = temp_dir.path().join("raw");
        fs::create_dir(&target_dir).unwrap();
        fs::write(&source, "raw data").unwrap();

        let target = target_dir.join("DSC001.arw");
        move_file(&source, &target).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "raw data");
    }

    #[test]
    fn test_move_file_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("DSC001.jpg");
        let target = temp_dir.path().join("existing.jpg");
        fs::write(&source, "new").unwrap();
        fs::write(&target, "old").unwrap();

        let err = move_file(&source, &target).unwrap_err();
        assert!(matches!(err, OrganizeError::DestinationExists(_)));

        // 來源與目標都保持原狀
        assert_eq!(fs::read_to_string(&source).unwrap(), "new");
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    }
}
