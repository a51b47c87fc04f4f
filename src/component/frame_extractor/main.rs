use super::extractor::extract_frames;
use crate::config::Config;
use crate::config::save::add_recent_path;
use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use log::warn;
use std::path::PathBuf;

/// 影格擷取（互動模式）
pub struct FrameExtractor {
    config: Config,
}

impl FrameExtractor {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 執行後回傳更新過最近路徑的設定
    pub fn run(mut self) -> Result<Config> {
        println!("{}", style("=== 影片影格擷取 ===").cyan().bold());

        let video_path = PathBuf::from(self.prompt_path("請輸入影片路徑")?);
        if !self.config.file_type_table.is_video_file(&video_path) {
            warn!("副檔名不在影片清單中: {}", video_path.display());
            println!("{}", style("注意：副檔名不像影片檔，仍嘗試開啟").yellow());
        }

        let output_dir = PathBuf::from(self.prompt_path("請輸入影格輸出資料夾")?);

        println!("{}", style("擷取影格中...").dim());
        let report = extract_frames(&video_path, &output_dir)
            .with_context(|| format!("無法擷取影格: {}", video_path.display()))?;

        println!(
            "  {} 影片 {}x{}, {:.1}s",
            style("i").dim(),
            report.video.width,
            report.video.height,
            report.video.duration_seconds
        );
        println!(
            "  {} Extracted {} frames from the video.",
            style("✓").green(),
            report.frame_count
        );

        add_recent_path(&mut self.config.settings, &output_dir.to_string_lossy());
        Ok(self.config)
    }

    fn prompt_path(&self, prompt: &str) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(recent) = self.config.settings.recent_paths.first() {
            input = input.default(recent.clone());
        }
        let path = input.interact_text()?;
        Ok(path.trim().to_string())
    }
}
