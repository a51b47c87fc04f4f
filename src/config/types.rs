use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 預設馬賽克張數（4x4）
pub const DEFAULT_NUM_IMAGES: usize = 16;
/// 預設輸出檔名
pub const DEFAULT_OUTPUT: &str = "mosaic.jpg";
/// 預設 JPEG 品質 (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn image_extensions_set(&self) -> HashSet<String> {
        Self::extension_set(&self.image_file)
    }

    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        Self::extension_set(&self.video_file)
    }

    /// 副檔名比對不分大小寫
    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        Self::has_extension_in(path, &self.image_extensions_set())
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        Self::has_extension_in(path, &self.video_extensions_set())
    }

    fn extension_set(extensions: &[String]) -> HashSet<String> {
        extensions.iter().map(|ext| ext.to_lowercase()).collect()
    }

    fn has_extension_in(path: &Path, extensions: &HashSet<String>) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

/// 馬賽克預設參數（互動選單使用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicSettings {
    pub num_images: usize,
    pub output_file_name: String,
    pub jpeg_quality: u8,
    pub parallel_decode: bool,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            num_images: DEFAULT_NUM_IMAGES,
            output_file_name: DEFAULT_OUTPUT.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel_decode: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub mosaic: MosaicSettings,
    /// 最近使用的路徑（最新在前）
    pub recent_paths: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}
