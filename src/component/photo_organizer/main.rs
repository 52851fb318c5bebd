use super::classifier::{Classifier, ClassifyResult};
use super::raw_filter::{FilterResult, RawFilter};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::error::OrganizeError;
use crate::tools::{FolderState, detect_folder_state, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 單次整理的結果
#[derive(Debug)]
pub enum OrganizeOutcome {
    /// 資料夾原為未分類：執行了分類
    Classified(ClassifyResult),
    /// 資料夾原為已分類：執行了 RAW 過濾
    Filtered(FilterResult),
}

/// 照片整理元件
///
/// 每次執行只做一輪「偵測狀態、執行對應動作」，不可續傳
pub struct PhotoOrganizer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl PhotoOrganizer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    /// 偵測資料夾狀態並執行對應動作
    ///
    /// 相機設定錯誤必須在任何檔案系統存取之前失敗
    pub fn organize(&self, root: &Path) -> Result<OrganizeOutcome, OrganizeError> {
        let settings = &self.config.settings;
        let exts = self.config.camera_table.extension_set(settings.camera)?;

        validate_directory_exists(root)?;

        match detect_folder_state(root, exts, &settings.folder_names) {
            FolderState::Unclassified => {
                info!("資料夾 {} 未分類，開始分類", root.display());
                let classifier = Classifier::new(
                    exts,
                    &settings.folder_names,
                    settings.dry_run,
                    Arc::clone(&self.shutdown_signal),
                );
                Ok(OrganizeOutcome::Classified(classifier.classify(root)?))
            }
            FolderState::Classified => {
                info!("資料夾 {} 已分類，開始過濾 RAW", root.display());
                let filter = RawFilter::new(
                    exts,
                    &settings.folder_names,
                    settings.dry_run,
                    Arc::clone(&self.shutdown_signal),
                );
                Ok(OrganizeOutcome::Filtered(filter.filter(root)?))
            }
            FolderState::Unknown => Err(OrganizeError::UnrecognizedFolderState(
                root.to_path_buf(),
            )),
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("organizer.title")).cyan().bold());
        println!(
            "{} {}",
            style(t!("organizer.camera_label")).dim(),
            self.config.settings.camera
        );
        let dry_run_state = if self.config.settings.dry_run {
            t!("common.enabled")
        } else {
            t!("common.disabled")
        };
        println!(
            "{} {}",
            style(t!("organizer.dry_run_label")).dim(),
            dry_run_state
        );
        println!();

        // 取得輸入路徑
        let Some(input_path) = self.prompt_input_path()? else {
            return Ok(()); // ESC pressed
        };
        let directory = PathBuf::from(&input_path);

        validate_directory_exists(&directory)?;

        // 更新路徑歷史並儲存
        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        // 先偵測狀態讓使用者確認要執行的動作
        let exts = self
            .config
            .camera_table
            .extension_set(self.config.settings.camera)?;
        let state = detect_folder_state(&directory, exts, &self.config.settings.folder_names);
        match state {
            FolderState::Unclassified => {
                println!("{}", style(t!("organizer.state_unclassified")).green());
            }
            FolderState::Classified => {
                println!("{}", style(t!("organizer.state_classified")).green());
            }
            FolderState::Unknown => {
                println!("{}", style(t!("organizer.state_unknown")).red());
                return Ok(());
            }
        }

        if !self.confirm_run()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        println!("{}", style(t!("organizer.processing")).cyan());
        let outcome = self.organize(&directory)?;
        self.print_outcome(&outcome);

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        // 如果沒有歷史路徑，直接輸入
        if recent_paths.is_empty() {
            let path: String = Input::new()
                .with_prompt(t!("organizer.prompt_path"))
                .interact_text()?;
            return Ok(Some(path.trim().to_string()));
        }

        // 建立選項清單：歷史路徑 + 輸入新路徑
        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let exists = Path::new(p).exists();
                let indicator = if exists { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("organizer.input_new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("organizer.prompt_select_path"))
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => {
                let path: String = Input::new()
                    .with_prompt(t!("organizer.prompt_path"))
                    .interact_text()?;
                Ok(Some(path.trim().to_string()))
            }
        }
    }

    fn confirm_run(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("organizer.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_outcome(&self, outcome: &OrganizeOutcome) {
        println!();
        println!("{}", style(t!("organizer.result_title")).cyan().bold());

        match outcome {
            OrganizeOutcome::Classified(result) => {
                println!(
                    "  {} {}",
                    t!("organizer.jpg_moved"),
                    style(result.jpg_moved).green()
                );
                println!(
                    "  {} {}",
                    t!("organizer.raw_moved"),
                    style(result.raw_moved).green()
                );
                info!(
                    "分類結果 - JPG: {}, RAW: {}",
                    result.jpg_moved, result.raw_moved
                );
                self.print_moves(&result.moves);
            }
            OrganizeOutcome::Filtered(result) => {
                if result.stems_matched == 0 {
                    println!("  {}", style(t!("organizer.nothing_to_filter")).green());
                } else {
                    println!(
                        "  {} {}",
                        t!("organizer.stems_matched"),
                        style(result.stems_matched).yellow()
                    );
                    println!(
                        "  {} {}",
                        t!("organizer.files_moved"),
                        style(result.files_moved).yellow()
                    );
                }
                info!(
                    "過濾結果 - 選中 stem: {}, 移動檔案: {}",
                    result.stems_matched, result.files_moved
                );
                self.print_moves(&result.moves);
            }
        }

        if self.config.settings.dry_run {
            println!();
            println!("{}", style(t!("organizer.dry_run_note")).yellow().bold());
        }
    }

    fn print_moves(&self, moves: &[crate::tools::MoveRecord]) {
        if moves.is_empty() {
            return;
        }

        println!();
        println!("{}", style(t!("organizer.moves_title")).dim());

        // 只顯示前 10 筆
        let display_count = moves.len().min(10);
        for record in moves.iter().take(display_count) {
            let name = record
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let target_dir = record
                .target
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            println!("  {} {} -> {}/", style("→").dim(), name, target_dir);
        }
        if moves.len() > display_count {
            println!(
                "  {} ...{}",
                style("⋯").dim(),
                moves.len() - display_count
            );
        }
    }
}
