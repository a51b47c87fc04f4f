use crate::config::types::{Config, FileTypeTable, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 編譯時嵌入的檔案類型設定（不需要外部檔案）
const FILE_TYPE_TABLE_JSON: &str = include_str!("../data/file_type_table.json");

/// 使用者設定檔位置（目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let file_type_table = FileTypeTable::embedded()?;
        let settings = Self::load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("設定檔讀取失敗，使用預設值: {e:#}");
            UserSettings::default()
        });

        Ok(Self {
            file_type_table,
            settings,
        })
    }

    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}

impl FileTypeTable {
    /// 從編譯時嵌入的 JSON 載入檔案類型表
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(FILE_TYPE_TABLE_JSON).context("無法解析嵌入的檔案類型設定")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_table_has_image_extensions() {
        let table = FileTypeTable::embedded().unwrap();
        let images = table.image_extensions_set();
        assert!(images.contains(".jpg"));
        assert!(images.contains(".jpeg"));
        assert!(images.contains(".png"));
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_is_image_file_case_insensitive() {
        let table = FileTypeTable::embedded().unwrap();
        assert!(table.is_image_file(Path::new("a/foo-1.JPG")));
        assert!(table.is_image_file(Path::new("foo.Jpeg")));
        assert!(table.is_image_file(Path::new("foo.png")));
        assert!(!table.is_image_file(Path::new("foo.gif")));
        assert!(!table.is_image_file(Path::new("jpg")));
        assert!(table.is_video_file(Path::new("clip.MP4")));
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Config::load_settings(&temp_dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_load_settings_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"mosaic": {"num_images": 25}}"#).unwrap();

        let settings = Config::load_settings(&path).unwrap();
        assert_eq!(settings.mosaic.num_images, 25);
        assert_eq!(settings.mosaic.output_file_name, "mosaic.jpg");
        assert!(settings.recent_paths.is_empty());
    }

    #[test]
    fn test_load_settings_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Config::load_settings(&path).is_err());
    }
}
