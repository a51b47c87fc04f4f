pub mod load;
pub mod save;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{
    Config, DEFAULT_JPEG_QUALITY, DEFAULT_NUM_IMAGES, DEFAULT_OUTPUT, FileTypeTable,
    MAX_RECENT_PATHS, MosaicSettings, UserSettings,
};
