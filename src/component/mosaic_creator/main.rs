use super::pipeline::{MosaicOptions, MosaicPipeline, MosaicReport};
use crate::config::Config;
use crate::config::save::add_recent_path;
use crate::tools::validate_directory_exists;
use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// 馬賽克產生器（互動模式）
pub struct MosaicCreator {
    config: Config,
}

impl MosaicCreator {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 執行後回傳更新過最近路徑的設定
    pub fn run(mut self) -> Result<Config> {
        println!("{}", style("=== 影像馬賽克 ===").cyan().bold());

        let folder = PathBuf::from(self.prompt_folder()?);
        validate_directory_exists(&folder)?;

        let defaults = &self.config.settings.mosaic;
        let num_images: usize = Input::new()
            .with_prompt("馬賽克張數")
            .default(defaults.num_images)
            .validate_with(|n: &usize| if *n > 0 { Ok(()) } else { Err("張數必須大於 0") })
            .interact_text()?;

        // 與 CLI 相同，預設寫到目前工作目錄
        let output: String = Input::new()
            .with_prompt("輸出檔案")
            .default(defaults.output_file_name.clone())
            .interact_text()?;

        let options = MosaicOptions {
            target_count: num_images,
            output_path: PathBuf::from(output.trim()),
            jpeg_quality: defaults.jpeg_quality,
            parallel_decode: defaults.parallel_decode,
            show_progress: true,
        };

        let pipeline = MosaicPipeline::new(self.config.file_type_table.clone(), options);
        let report = pipeline
            .run(&folder)
            .with_context(|| format!("無法建立馬賽克: {}", folder.display()))?;

        print_report(&report, &folder);

        add_recent_path(&mut self.config.settings, &folder.to_string_lossy());
        Ok(self.config)
    }

    fn prompt_folder(&self) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt("請輸入影像資料夾路徑");
        if let Some(recent) = self.config.settings.recent_paths.first() {
            input = input.default(recent.clone());
        }
        let path = input.interact_text()?;
        Ok(path.trim().to_string())
    }
}

fn print_report(report: &MosaicReport, folder: &Path) {
    println!();
    println!("{}", style("=== 馬賽克摘要 ===").cyan().bold());
    println!("  來源: {}", folder.display());
    println!("  載入: {} 張", report.loaded);
    if report.skipped > 0 {
        println!("  略過: {} 張（無法解碼）", style(report.skipped).yellow());
    }
    println!(
        "  網格: {}x{}（{} 張，每格 {}x{}）",
        report.grid_side,
        report.grid_side,
        report.sampled,
        report.tile_shape.1,
        report.tile_shape.0
    );
    println!(
        "  {} {}",
        style("已儲存:").green(),
        report.output_path.display()
    );
}
