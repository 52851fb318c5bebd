use crate::error::OrganizeError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// 最多保留的歷史路徑數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 支援的相機類型
///
/// 封閉列舉：新增相機時需同時在 `camera_table.json` 登錄副檔名集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Camera {
    #[default]
    Sony,
    Canon,
    Nikon,
    Fujifilm,
    Panasonic,
    Olympus,
}

impl Camera {
    pub const ALL: [Self; 6] = [
        Self::Sony,
        Self::Canon,
        Self::Nikon,
        Self::Fujifilm,
        Self::Panasonic,
        Self::Olympus,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sony => "SONY",
            Self::Canon => "CANON",
            Self::Nikon => "NIKON",
            Self::Fujifilm => "FUJIFILM",
            Self::Panasonic => "PANASONIC",
            Self::Olympus => "OLYMPUS",
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Camera {
    type Err = OrganizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|camera| camera.as_str() == id)
            .ok_or_else(|| OrganizeError::UnsupportedCamera(s.to_string()))
    }
}

/// 單一相機的副檔名集合
///
/// 副檔名全部小寫並含開頭的點（例如 `.jpg`），jpg 與 raw 兩組互斥
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionSet {
    pub jpg: Vec<String>,
    pub raw: Vec<String>,
}

impl ExtensionSet {
    #[must_use]
    pub fn jpg_set(&self) -> HashSet<String> {
        self.jpg.iter().map(|ext| ext.to_lowercase()).collect()
    }

    #[must_use]
    pub fn raw_set(&self) -> HashSet<String> {
        self.raw.iter().map(|ext| ext.to_lowercase()).collect()
    }

    /// 取得小寫的副檔名（含開頭的點），比對一律不分大小寫
    fn suffix_of(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
    }

    #[must_use]
    pub fn is_jpg_file(&self, path: &Path) -> bool {
        Self::suffix_of(path).is_some_and(|suffix| self.jpg_set().contains(&suffix))
    }

    #[must_use]
    pub fn is_raw_file(&self, path: &Path) -> bool {
        Self::suffix_of(path).is_some_and(|suffix| self.raw_set().contains(&suffix))
    }
}

/// 相機副檔名登錄表，對應編譯時嵌入的 `camera_table.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraTable {
    pub cameras: HashMap<Camera, ExtensionSet>,
}

impl CameraTable {
    /// 查詢相機的副檔名集合
    pub fn extension_set(&self, camera: Camera) -> Result<&ExtensionSet, OrganizeError> {
        self.cameras
            .get(&camera)
            .ok_or_else(|| OrganizeError::UnsupportedCamera(camera.as_str().to_string()))
    }

    /// 驗證每台相機的 jpg 與 raw 集合互斥
    pub fn validate(&self) -> anyhow::Result<()> {
        for (camera, exts) in &self.cameras {
            let overlap: Vec<String> = exts
                .jpg_set()
                .intersection(&exts.raw_set())
                .cloned()
                .collect();
            if !overlap.is_empty() {
                anyhow::bail!("相機 {camera} 的 jpg 與 raw 副檔名重疊: {overlap:?}");
            }
        }
        Ok(())
    }
}

/// 語言模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnUs => "English",
            Self::ZhCn => "简体中文",
        };
        f.write_str(name)
    }
}

/// 分類目標資料夾名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderNames {
    pub jpg: String,
    pub raw: String,
    pub del: String,
}

impl Default for FolderNames {
    fn default() -> Self {
        Self {
            jpg: "jpg".to_string(),
            raw: "raw".to_string(),
            del: "del".to_string(),
        }
    }
}

/// 使用者設定，持久化於工作目錄的 settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub camera: Camera,
    /// 安全模式：只模擬檔案移動，不實際變更檔案系統
    pub dry_run: bool,
    pub folder_names: FolderNames,
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            camera: Camera::default(),
            // 預設開啟安全模式，第一次使用不會動到檔案
            dry_run: true,
            folder_names: FolderNames::default(),
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub camera_table: CameraTable,
    pub settings: UserSettings,
}
