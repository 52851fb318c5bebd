use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出資料夾第一層的檔案（不遞迴，子資料夾一律忽略）
#[must_use]
pub fn scan_loose_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("讀取目錄項目失敗: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
