use crate::config::types::{CameraTable, Config, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 編譯時嵌入的相機副檔名登錄表（不需要外部檔案）
const CAMERA_TABLE_JSON: &str = include_str!("../data/camera_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        let camera_table = Self::load_embedded_camera_table()?;
        let settings = Self::load_settings().unwrap_or_default();

        Ok(Self {
            camera_table,
            settings,
        })
    }

    fn load_settings() -> Result<UserSettings> {
        let path = Path::new("settings.json");
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// 從編譯時嵌入的 JSON 載入相機登錄表並驗證不變量
    fn load_embedded_camera_table() -> Result<CameraTable> {
        let table: CameraTable =
            serde_json::from_str(CAMERA_TABLE_JSON).context("無法解析嵌入的相機設定")?;
        table.validate()?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Camera;

    #[test]
    fn test_embedded_table_loads_and_validates() {
        let table = Config::load_embedded_camera_table().unwrap();

        // 每台列舉中的相機都必須有登錄
        for camera in Camera::ALL {
            let exts = table.extension_set(camera).unwrap();
            assert!(!exts.jpg.is_empty(), "{camera} 缺少 jpg 副檔名");
            assert!(!exts.raw.is_empty(), "{camera} 缺少 raw 副檔名");
        }
    }

    #[test]
    fn test_sony_matches_original_config() {
        let table = Config::load_embedded_camera_table().unwrap();
        let sony = table.extension_set(Camera::Sony).unwrap();
        assert_eq!(sony.jpg, vec![".jpg".to_string()]);
        assert_eq!(sony.raw, vec![".arw".to_string()]);
    }
}
