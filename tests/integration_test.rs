//! 整合測試 - 透過 PhotoOrganizer 驗證「偵測狀態、執行動作」的完整流程

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use auto_photo_organize::component::photo_organizer::{OrganizeOutcome, PhotoOrganizer};
use auto_photo_organize::config::{Camera, CameraTable, Config, UserSettings};
use auto_photo_organize::error::OrganizeError;
use tempfile::TempDir;

/// 以明確的設定建立元件，不依賴工作目錄的 settings.json
fn organizer(dry_run: bool) -> PhotoOrganizer {
    let mut config = Config::new().expect("無法載入設定");
    config.settings = UserSettings {
        camera: Camera::Sony,
        dry_run,
        ..UserSettings::default()
    };
    PhotoOrganizer::new(config, Arc::new(AtomicBool::new(false)))
}

fn write_files(root: &Path, names: &[&str]) {
    for name in names {
        fs::write(root.join(name), *name).unwrap();
    }
}

/// 情境 1 + 2：第一次執行分類，第二次執行過濾
#[test]
fn test_classify_then_filter_flow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(root, &["a.jpg", "a.arw", "b.arw"]);

    let organizer = organizer(false);

    // 第一次：未分類 -> 分類
    let outcome = organizer.organize(root).unwrap();
    match outcome {
        OrganizeOutcome::Classified(result) => {
            assert_eq!(result.jpg_moved, 1);
            assert_eq!(result.raw_moved, 2);
        }
        OrganizeOutcome::Filtered(_) => panic!("第一次執行應該是分類"),
    }
    assert!(root.join("jpg/a.jpg").exists());
    assert!(root.join("raw/a.arw").exists());
    assert!(root.join("raw/b.arw").exists());

    // 第二次：已分類 -> 過濾，b.arw 沒有對應 JPG
    let outcome = organizer.organize(root).unwrap();
    match outcome {
        OrganizeOutcome::Filtered(result) => {
            assert_eq!(result.stems_matched, 1);
            assert_eq!(result.files_moved, 1);
        }
        OrganizeOutcome::Classified(_) => panic!("第二次執行應該是過濾"),
    }
    assert!(root.join("raw/a.arw").exists());
    assert!(root.join("del/b.arw").exists());
    assert!(!root.join("raw/b.arw").exists());

    // jpg/ 內容不受過濾影響
    assert!(root.join("jpg/a.jpg").exists());
}

/// 已分類且所有 RAW 都有對應 JPG：不移動任何檔案，del/ 仍會建立
#[test]
fn test_filter_with_nothing_to_do() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("jpg")).unwrap();
    fs::create_dir(root.join("raw")).unwrap();
    write_files(&root.join("jpg"), &["a.jpg"]);
    write_files(&root.join("raw"), &["a.arw"]);

    let outcome = organizer(false).organize(root).unwrap();
    match outcome {
        OrganizeOutcome::Filtered(result) => {
            assert_eq!(result.stems_matched, 0);
            assert_eq!(result.files_moved, 0);
        }
        OrganizeOutcome::Classified(_) => panic!("應該執行過濾"),
    }
    assert!(root.join("del").is_dir());
    assert!(root.join("raw/a.arw").exists());
}

/// 狀態無法識別：回報錯誤且不做任何變更
#[test]
fn test_unknown_state_aborts_without_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(root, &["notes.txt", "report.pdf"]);

    let err = organizer(false).organize(root).unwrap_err();
    assert!(matches!(err, OrganizeError::UnrecognizedFolderState(_)));

    // 沒有建立任何資料夾、沒有移動任何檔案
    assert!(!root.join("jpg").exists());
    assert!(!root.join("raw").exists());
    assert!(!root.join("del").exists());
    assert!(root.join("notes.txt").exists());
    assert!(root.join("report.pdf").exists());
}

/// 路徑不存在或不是資料夾
#[test]
fn test_invalid_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does_not_exist");

    let err = organizer(false).organize(&missing).unwrap_err();
    assert!(matches!(err, OrganizeError::InvalidPath(_)));
}

/// 不支援的相機識別字串在解析階段就失敗
#[test]
fn test_unsupported_camera_id() {
    let err = "HASSELBLAD".parse::<Camera>().unwrap_err();
    assert!(matches!(err, OrganizeError::UnsupportedCamera(_)));
}

/// 相機查表失敗必須發生在任何檔案系統存取之前：
/// 對不存在的路徑執行時回報的是 UnsupportedCamera 而非 InvalidPath
#[test]
fn test_camera_lookup_precedes_filesystem_access() {
    let mut config = Config::new().expect("無法載入設定");
    config.camera_table = CameraTable {
        cameras: std::collections::HashMap::new(),
    };
    config.settings = UserSettings {
        camera: Camera::Sony,
        dry_run: false,
        ..UserSettings::default()
    };
    let organizer = PhotoOrganizer::new(config, Arc::new(AtomicBool::new(false)));

    let err = organizer
        .organize(Path::new("/no/such/folder"))
        .unwrap_err();
    assert!(matches!(err, OrganizeError::UnsupportedCamera(_)));
}

/// Dry-run 的計數與實際執行一致，但不動檔案系統
#[test]
fn test_dry_run_matches_real_counts() {
    let files = ["a.jpg", "a.arw", "b.arw", "c.arw", "notes.txt"];

    let dry_dir = TempDir::new().unwrap();
    write_files(dry_dir.path(), &files);
    let dry_outcome = organizer(true).organize(dry_dir.path()).unwrap();

    let real_dir = TempDir::new().unwrap();
    write_files(real_dir.path(), &files);
    let real_outcome = organizer(false).organize(real_dir.path()).unwrap();

    let (OrganizeOutcome::Classified(dry), OrganizeOutcome::Classified(real)) =
        (dry_outcome, real_outcome)
    else {
        panic!("兩次都應該是分類");
    };

    assert_eq!(dry.jpg_moved, real.jpg_moved);
    assert_eq!(dry.raw_moved, real.raw_moved);
    assert_eq!(dry.moves.len(), real.moves.len());

    // dry-run 的資料夾完全未變動
    for name in files {
        assert!(dry_dir.path().join(name).exists());
    }
    assert!(!dry_dir.path().join("jpg").exists());
    assert!(!dry_dir.path().join("raw").exists());
}

/// 副檔名比對不分大小寫（.JPG / .ARW 也要被分類）
#[test]
fn test_mixed_case_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(root, &["DSC001.JPG", "DSC001.ARW", "DSC002.ARW"]);

    let outcome = organizer(false).organize(root).unwrap();
    let OrganizeOutcome::Classified(result) = outcome else {
        panic!("應該執行分類");
    };

    assert_eq!(result.jpg_moved, 1);
    assert_eq!(result.raw_moved, 2);
    assert!(root.join("jpg/DSC001.JPG").exists());
    assert!(root.join("raw/DSC002.ARW").exists());
}
