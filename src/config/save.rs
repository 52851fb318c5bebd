use crate::config::types::{MAX_RECENT_PATHS, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &UserSettings) -> Result<()> {
    // 寫入工作目錄的 settings.json
    let path = Path::new("settings.json");
    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

/// 更新最近使用的路徑：新路徑置頂、去重、限制數量
pub fn add_recent_path(settings: &mut UserSettings, path: &str) {
    settings.recent_paths.retain(|p| p != path);
    settings.recent_paths.insert(0, path.to_string());
    settings.recent_paths.truncate(MAX_RECENT_PATHS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_recent_path_dedup_and_cap() {
        let mut settings = UserSettings::default();

        for i in 0..MAX_RECENT_PATHS + 3 {
            add_recent_path(&mut settings, &format!("/photos/{i}"));
        }
        assert_eq!(settings.recent_paths.len(), MAX_RECENT_PATHS);

        // 重複路徑應移到最前面而不是新增
        add_recent_path(&mut settings, "/photos/5");
        assert_eq!(settings.recent_paths[0], "/photos/5");
        assert_eq!(settings.recent_paths.len(), MAX_RECENT_PATHS);
    }
}
