use super::scan_loose_files;
use crate::config::{ExtensionSet, FolderNames};
use std::path::Path;

/// 目標資料夾的狀態，每次執行都從檔案系統重新推導
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderState {
    /// 根目錄散落著尚未分類的 JPG 與 RAW 檔案
    Unclassified,
    /// jpg/ 與 raw/ 子資料夾都已存在
    Classified,
    /// 兩種條件都不成立
    Unknown,
}

/// 根目錄第一層同時存在至少一個 JPG 與至少一個 RAW 檔案時視為未分類
#[must_use]
pub fn is_unclassified(root: &Path, exts: &ExtensionSet) -> bool {
    let files = scan_loose_files(root);
    let has_jpg = files.iter().any(|p| exts.is_jpg_file(p));
    let has_raw = files.iter().any(|p| exts.is_raw_file(p));
    has_jpg && has_raw
}

/// jpg/ 與 raw/ 都存在且為資料夾時視為已分類，內容不另行檢查
#[must_use]
pub fn is_classified(root: &Path, folders: &FolderNames) -> bool {
    root.join(&folders.jpg).is_dir() && root.join(&folders.raw).is_dir()
}

/// 偵測資料夾狀態，未分類優先於已分類
#[must_use]
pub fn detect_folder_state(root: &Path, exts: &ExtensionSet, folders: &FolderNames) -> FolderState {
    if is_unclassified(root, exts) {
        FolderState::Unclassified
    } else if is_classified(root, folders) {
        FolderState::Classified
    } else {
        FolderState::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sony_exts() -> ExtensionSet {
        ExtensionSet {
            jpg: vec![".jpg".to_string()],
            raw: vec![".arw".to_string()],
        }
    }

    #[test]
    fn test_unclassified_needs_both_kinds() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let exts = sony_exts();

        assert!(!is_unclassified(root, &exts));

        fs::write(root.join("a.jpg"), "jpg").unwrap();
        assert!(!is_unclassified(root, &exts));

        fs::write(root.join("a.arw"), "raw").unwrap();
        assert!(is_unclassified(root, &exts));
    }

    #[test]
    fn test_unclassified_ignores_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // 子資料夾內的檔案不算根目錄的散落檔案
        fs::create_dir(root.join("backup")).unwrap();
        fs::write(root.join("backup/a.jpg"), "jpg").unwrap();
        fs::write(root.join("backup/a.arw"), "raw").unwrap();

        assert!(!is_unclassified(root, &sony_exts()));
    }

    #[test]
    fn test_classified_regardless_of_contents() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let folders = FolderNames::default();

        assert!(!is_classified(root, &folders));

        fs::create_dir(root.join("jpg")).unwrap();
        assert!(!is_classified(root, &folders));

        // 兩個空資料夾就足夠判定為已分類
        fs::create_dir(root.join("raw")).unwrap();
        assert!(is_classified(root, &folders));
    }

    #[test]
    fn test_unclassified_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let exts = sony_exts();
        let folders = FolderNames::default();

        fs::create_dir(root.join("jpg")).unwrap();
        fs::create_dir(root.join("raw")).unwrap();
        fs::write(root.join("b.jpg"), "jpg").unwrap();
        fs::write(root.join("b.arw"), "raw").unwrap();

        assert_eq!(
            detect_folder_state(root, &exts, &folders),
            FolderState::Unclassified
        );
    }

    #[test]
    fn test_unknown_state() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("notes.txt"), "text").unwrap();

        assert_eq!(
            detect_folder_state(root, &sony_exts(), &FolderNames::default()),
            FolderState::Unknown
        );
    }
}
