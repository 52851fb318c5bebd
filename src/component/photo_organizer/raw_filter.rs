use crate::config::{ExtensionSet, FolderNames};
use crate::error::OrganizeError;
use crate::tools::{MoveRecord, ensure_directory_exists, move_file, scan_loose_files};
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// RAW 過濾結果
#[derive(Debug, Default)]
pub struct FilterResult {
    /// 沒有對應 JPG 的 stem 數量（原工具回報的數字）
    pub stems_matched: usize,
    /// 實際移動的檔案數；同一個 stem 可能對應多個檔案（例如 sidecar），
    /// 此時會大於 `stems_matched`
    pub files_moved: usize,
    /// 實際（或 dry-run 模式下計畫中）的移動清單
    pub moves: Vec<MoveRecord>,
}

/// RAW 過濾器
///
/// 在已分類的資料夾中，把 raw/ 內沒有對應 JPG（以檔名 stem 比對）的
/// 檔案移入 del/。stem 比對為精確字串比對，大小寫依檔案系統而定
pub struct RawFilter<'a> {
    exts: &'a ExtensionSet,
    folders: &'a FolderNames,
    dry_run: bool,
    shutdown_signal: Arc<AtomicBool>,
}

impl<'a> RawFilter<'a> {
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

    /// 收集資料夾第一層中符合副檔名條件的檔案 stem
    fn collect_stems(dir: &Path, matches: impl Fn(&Path) -> bool) -> HashSet<String> {
        scan_loose_files(dir)
            .into_iter()
            .filter(|p| matches(p))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect()
    }

    pub fn filter(&self, root: &Path) -> Result<FilterResult, OrganizeError> {
        let dir_jpg = root.join(&self.folders.jpg);
        let dir_raw = root.join(&self.folders.raw);
        let dir_del = root.join(&self.folders.del);

        // del/ 一律先建立，即使最後沒有東西要過濾
        if self.dry_run {
            info!("[DRY RUN] 建立資料夾: {}", dir_del.display());
        } else {
            ensure_directory_exists(&dir_del)?;
        }

        let stems_jpg = Self::collect_stems(&dir_jpg, |p| self.exts.is_jpg_file(p));
        let stems_raw = Self::collect_stems(&dir_raw, |p| self.exts.is_raw_file(p));

        let stems_del: HashSet<String> = stems_raw.difference(&stems_jpg).cloned().collect();

        if stems_del.is_empty() {
            info!("未發現需要過濾的 RAW 檔案");
            return Ok(FilterResult::default());
        }

        let mut result = FilterResult {
            stems_matched: stems_del.len(),
            ..FilterResult::default()
        };

        // raw/ 內 stem 命中的檔案全部移動，不限副檔名（sidecar 一併帶走）
        for file in scan_loose_files(&dir_raw) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，停止過濾");
                break;
            }

            let Some(stem) = file.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if !stems_del.contains(&stem) {
                continue;
            }

            let Some(file_name) = file.file_name() else {
                continue;
            };
            let target = dir_del.join(file_name);

            if self.dry_run {
                debug!(
                    "[DRY RUN] 移動檔案: {} -> {}",
                    file.display(),
                    target.display()
                );
            } else {
                move_file(&file, &target)?;
            }

            result.files_moved += 1;
            result.moves.push(MoveRecord {
                source: file,
                target,
            });
        }

        info!(
            "RAW 過濾完成 - 選中 stem: {}, 移動檔案: {}",
            result.stems_matched, result.files_moved
        );
        Ok(result)
    }
}
