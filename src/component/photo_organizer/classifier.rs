use crate::config::{ExtensionSet, FolderNames};
use crate::error::OrganizeError;
use crate::tools::{MoveRecord, ensure_directory_exists, move_file, scan_loose_files};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 分類結果
#[derive(Debug, Default)]
pub struct ClassifyResult {
    /// 移入 jpg/ 的檔案數
    pub jpg_moved: usize,
    /// 移入 raw/ 的檔案數
    pub raw_moved: usize,
    /// 實際（或 dry-run 模式下計畫中）的移動清單
    pub moves: Vec<MoveRecord>,
}

enum Bucket {
    Jpg,
    Raw,
}

/// 檔案分類器
///
/// 把根目錄第一層散落的照片依副檔名移入 jpg/ 與 raw/，
/// 不符合任何副檔名的檔案原地保留
pub struct Classifier<'a> {
    exts: &'a ExtensionSet,
    folders: &'a FolderNames,
    dry_run: bool,
    shutdown_signal: Arc<AtomicBool>,
}

impl<'a> Classifier<'a> {
    pub const fn new(
        exts: &'a ExtensionSet,
        folders: &'a FolderNames,
        dry_run: bool,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            exts,
            folders,
            dry_run,
            shutdown_signal,
        }
    }

    pub fn classify(&self, root: &Path) -> Result<ClassifyResult, OrganizeError> {
        let dir_jpg = root.join(&self.folders.jpg);
        let dir_raw = root.join(&self.folders.raw);

        if self.dry_run {
            info!(
                "[DRY RUN] 建立資料夾: {}, {}",
                dir_jpg.display(),
                dir_raw.display()
            );
        } else {
            ensure_directory_exists(&dir_jpg)?;
            ensure_directory_exists(&dir_raw)?;
        }

        let mut result = ClassifyResult::default();

        for file in scan_loose_files(root) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，停止分類");
                break;
            }

            let bucket = if self.exts.is_jpg_file(&file) {
                Bucket::Jpg
            } else if self.exts.is_raw_file(&file) {
                Bucket::Raw
            } else {
                continue;
            };

            let Some(file_name) = file.file_name() else {
                continue;
            };
            let target = match bucket {
                Bucket::Jpg => dir_jpg.join(file_name),
                Bucket::Raw => dir_raw.join(file_name),
            };

            if self.dry_run {
                debug!(
                    "[DRY RUN] 移動檔案: {} -> {}",
                    file.display(),
                    target.display()
                );
            } else {
                move_file(&file, &target)?;
            }

            match bucket {
                Bucket::Jpg => result.jpg_moved += 1,
                Bucket::Raw => result.raw_moved += 1,
            }
            result.moves.push(MoveRecord {
                source: file,
                target,
            });
        }

        info!(
            "分類完成 - JPG: {}, RAW: {}",
            result.jpg_moved, result.raw_moved
        );
        Ok(result)
    }
}
