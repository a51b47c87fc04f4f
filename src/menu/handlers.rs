use crate::component::{FrameExtractor, MosaicCreator};
use crate::config::save::save_settings;
use crate::config::{Config, SETTINGS_FILE};
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::warn;
use std::path::Path;

pub fn run_frame_extractor(term: &Term, config: &mut Config) -> Result<()> {
    let extractor = FrameExtractor::new(config.clone());

    match extractor.run() {
        Ok(updated) => remember(config, updated),
        Err(e) => eprintln!("{} {:#}", style("錯誤:").red().bold(), e),
    }

    pause(term)?;
    Ok(())
}

pub fn run_mosaic_creator(term: &Term, config: &mut Config) -> Result<()> {
    let creator = MosaicCreator::new(config.clone());

    match creator.run() {
        Ok(updated) => remember(config, updated),
        Err(e) => eprintln!("{} {:#}", style("錯誤:").red().bold(), e),
    }

    pause(term)?;
    Ok(())
}

/// 保存最近路徑；寫檔失敗只記錄警告
fn remember(config: &mut Config, updated: Config) {
    *config = updated;
    if let Err(e) = save_settings(&config.settings, Path::new(SETTINGS_FILE)) {
        warn!("無法儲存設定: {e:#}");
    }
}
