//! 馬賽克流程的錯誤型別
//!
//! 單張影像解碼失敗不屬於錯誤：該檔案會被略過並計入 `skipped`。

use std::path::PathBuf;
use thiserror::Error;

/// (高, 寬)
pub type Shape = (usize, usize);

#[derive(Error, Debug)]
pub enum MosaicError {
    /// 影片來源無法開啟
    #[error("cannot open video source {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// 可用影像少於要求的張數
    #[error(
        "folder contains fewer usable images than requested for the mosaic: {available} available, {requested} requested"
    )]
    InsufficientImages { available: usize, requested: usize },

    /// 取樣後的影像尺寸不一致
    #[error("image #{index} has shape {actual:?} but the mosaic tiles are {expected:?} (height, width)")]
    ShapeMismatch {
        index: usize,
        expected: Shape,
        actual: Shape,
    },

    #[error("no images to compose")]
    EmptySequence,

    #[error("{tiles} tiles do not fit in a grid with {capacity} cells")]
    GridTooSmall { tiles: usize, capacity: usize },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("cannot read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg 在影片成功開啟後仍失敗
    #[error("frame extraction failed: {reason}")]
    FrameExtraction { reason: String },
}

impl MosaicError {
    /// CLI 結束碼
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceUnavailable { .. } => 2,
            Self::InsufficientImages { .. } => 3,
            Self::ShapeMismatch { .. } => 4,
            Self::DirectoryRead { .. } | Self::ImageSave { .. } | Self::Io { .. } => 5,
            Self::FrameExtraction { .. } => 6,
            Self::EmptySequence | Self::GridTooSmall { .. } | Self::InvalidParameter { .. } => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MosaicError>;
