//! 影像編解碼
//!
//! 記憶體中的影像一律為 `(高, 寬, 3)` 的 RGB `u8` 陣列。

use crate::error::{MosaicError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult, RgbImage};
use log::debug;
use ndarray::Array3;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 影像陣列，形狀 (H, W, 3)，通道順序 RGB
pub type Frame = Array3<u8>;

pub const RGB_CHANNELS: usize = 3;

/// 解碼影像檔；任何失敗都回傳 `None`
///
/// 格式依檔案內容判斷，副檔名與內容不符的檔案仍可載入。
#[must_use]
pub fn decode_frame(path: &Path) -> Option<Frame> {
    let decoded = match open_guessed(path) {
        Ok(img) => img,
        Err(e) => {
            debug!("無法解碼影像 {}: {e}", path.display());
            return None;
        }
    };

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    Array3::from_shape_vec((height as usize, width as usize, RGB_CHANNELS), rgb.into_raw())
        .map_err(|e| debug!("影像資料形狀不符 {}: {e}", path.display()))
        .ok()
}

fn open_guessed(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// (高, 寬)
#[must_use]
pub fn frame_shape(frame: &Frame) -> (usize, usize) {
    let (height, width, _) = frame.dim();
    (height, width)
}

/// 轉換為 `image` 的 RGB 影像
pub fn frame_to_rgb_image(frame: &Frame) -> Result<RgbImage> {
    let (height, width, _) = frame.dim();
    let too_large = || MosaicError::InvalidParameter {
        name: "frame",
        reason: format!("{width}x{height} exceeds the encoder's size limit"),
    };
    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(height).map_err(|_| too_large())?;

    // iter() 依邏輯順序走訪，不受記憶體佈局影響
    let raw: Vec<u8> = frame.iter().copied().collect();
    RgbImage::from_raw(width, height, raw).ok_or_else(too_large)
}

/// 編碼並寫入檔案
///
/// 先寫入同目錄的暫存檔再改名，失敗時不會在 `path` 留下不完整的檔案。
/// 格式由副檔名決定，`quality` 僅用於 JPEG。
pub fn encode_frame(frame: &Frame, path: &Path, quality: u8) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|source| MosaicError::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;
    let image = DynamicImage::ImageRgb8(frame_to_rgb_image(frame)?);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MosaicError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = write_encoded(&image, &temp_path, format, quality)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| MosaicError::io(path, e)));

    if written.is_err() && temp_path.exists() && fs::remove_file(&temp_path).is_err() {
        debug!("無法移除暫存檔: {}", temp_path.display());
    }

    written?;
    debug!("影像已寫入: {}", path.display());
    Ok(())
}

fn write_encoded(
    image: &DynamicImage,
    temp_path: &Path,
    format: ImageFormat,
    quality: u8,
) -> Result<()> {
    let save_error = |source: image::ImageError| MosaicError::ImageSave {
        path: temp_path.to_path_buf(),
        source,
    };

    let file = File::create(temp_path).map_err(|e| MosaicError::io(temp_path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
            image.write_with_encoder(encoder).map_err(save_error)?;
        }
        _ => image.write_to(&mut writer, format).map_err(save_error)?,
    }

    writer.flush().map_err(|e| MosaicError::io(temp_path, e))?;
    Ok(())
}

/// `out/mosaic.jpg` → `out/.mosaic.jpg.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().to_string());
    path.with_file_name(format!(".{file_name}.tmp"))
}
