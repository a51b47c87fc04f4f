//! 馬賽克流程：載入 → 取樣 → 網格 → 合成 → 輸出
//!
//! 任何步驟失敗即中止，不重試。輸出先寫入暫存檔再改名，
//! 失敗時不會在輸出路徑留下檔案。

use super::compositor::compose;
use super::grid_layout::grid_side;
use super::image_source::ImageSource;
use super::sampler::sample_uniformly;
use crate::config::{DEFAULT_JPEG_QUALITY, DEFAULT_NUM_IMAGES, DEFAULT_OUTPUT, FileTypeTable};
use crate::error::{MosaicError, Result};
use crate::tools::{Frame, encode_frame, frame_shape};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MosaicOptions {
    /// 馬賽克張數
    pub target_count: usize,
    pub output_path: PathBuf,
    /// JPEG 品質 (1-100)，其他格式忽略
    pub jpeg_quality: u8,
    pub parallel_decode: bool,
    pub show_progress: bool,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_NUM_IMAGES,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel_decode: true,
            show_progress: false,
        }
    }
}

/// 單次執行摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicReport {
    /// 成功解碼的影像數
    pub loaded: usize,
    /// 無法解碼而略過的檔案數
    pub skipped: usize,
    pub sampled: usize,
    pub grid_side: usize,
    /// 單格 (高, 寬)
    pub tile_shape: (usize, usize),
    /// 馬賽克 (高, 寬)
    pub mosaic_shape: (usize, usize),
    pub output_path: PathBuf,
}

pub struct MosaicPipeline {
    source: ImageSource,
    options: MosaicOptions,
}

impl MosaicPipeline {
    #[must_use]
    pub fn new(file_type_table: FileTypeTable, options: MosaicOptions) -> Self {
        let source = ImageSource::new(file_type_table)
            .with_parallel(options.parallel_decode)
            .with_progress(options.show_progress)
            .with_excluded(options.output_path.clone());
        Self { source, options }
    }

    #[must_use]
    pub const fn options(&self) -> &MosaicOptions {
        &self.options
    }

    /// 產生馬賽克並寫入 `output_path`
    pub fn run(&self, folder: &Path) -> Result<MosaicReport> {
        let (mosaic, mut report) = self.build(folder)?;

        encode_frame(&mosaic, &self.options.output_path, self.options.jpeg_quality)?;
        report.output_path.clone_from(&self.options.output_path);

        info!(
            "馬賽克已建立: {} ({}x{} 網格, {}x{} 像素)",
            report.output_path.display(),
            report.grid_side,
            report.grid_side,
            report.mosaic_shape.1,
            report.mosaic_shape.0
        );

        Ok(report)
    }

    /// 產生馬賽克但不寫檔
    pub fn build(&self, folder: &Path) -> Result<(Frame, MosaicReport)> {
        let target_count = self.options.target_count;
        if target_count == 0 {
            return Err(MosaicError::InvalidParameter {
                name: "num_images",
                reason: "must be at least 1".to_string(),
            });
        }

        let loaded = self.source.load(folder)?;
        if loaded.len() < target_count {
            return Err(MosaicError::InsufficientImages {
                available: loaded.len(),
                requested: target_count,
            });
        }

        let (available, skipped) = (loaded.len(), loaded.skipped);
        let sampled = sample_uniformly(loaded.images, target_count);
        let side = grid_side(target_count);
        let mosaic = compose(&sampled, side)?;

        let report = MosaicReport {
            loaded: available,
            skipped,
            sampled: sampled.len(),
            grid_side: side,
            tile_shape: sampled.first().map_or((0, 0), frame_shape),
            mosaic_shape: frame_shape(&mosaic),
            output_path: PathBuf::new(),
        };

        Ok((mosaic, report))
    }
}

/// 以預設檔案類型表與預設選項執行一次流程
pub fn create_mosaic(
    folder: &Path,
    target_count: usize,
    output_path: &Path,
) -> anyhow::Result<MosaicReport> {
    let options = MosaicOptions {
        target_count,
        output_path: output_path.to_path_buf(),
        ..MosaicOptions::default()
    };
    let pipeline = MosaicPipeline::new(FileTypeTable::embedded()?, options);
    Ok(pipeline.run(folder)?)
}
