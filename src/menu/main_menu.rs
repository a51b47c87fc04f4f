use crate::config::save::save_settings;
use crate::config::{Config, SETTINGS_FILE};
use crate::menu::handlers::{run_frame_extractor, run_mosaic_creator};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 影格馬賽克工具 ===").cyan().bold());
    println!("{}", style("按 ESC 離開").dim());

    let options = vec!["影片影格擷取", "建立影像馬賽克", "設定", "離開"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_frame_extractor(term, config)?;
            Ok(true)
        }
        Some(1) => {
            run_mosaic_creator(term, config)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// 馬賽克預設值設定
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style("=== 馬賽克設定 ===").cyan().bold());

    let current = config.settings.mosaic.clone();
    let theme = ColorfulTheme::default();

    let num_images: usize = Input::with_theme(&theme)
        .with_prompt("預設張數")
        .default(current.num_images)
        .validate_with(|n: &usize| if *n > 0 { Ok(()) } else { Err("張數必須大於 0") })
        .interact_text_on(term)?;

    let output_file_name: String = Input::with_theme(&theme)
        .with_prompt("預設輸出檔名")
        .default(current.output_file_name.clone())
        .interact_text_on(term)?;

    let jpeg_quality: u8 = Input::with_theme(&theme)
        .with_prompt("JPEG 品質 (1-100)")
        .default(current.jpeg_quality)
        .validate_with(|q: &u8| {
            if (1..=100).contains(q) {
                Ok(())
            } else {
                Err("品質必須介於 1 到 100")
            }
        })
        .interact_text_on(term)?;

    let parallel_decode = Confirm::with_theme(&theme)
        .with_prompt("平行解碼影像？")
        .default(current.parallel_decode)
        .interact_on(term)?;

    let mosaic = &mut config.settings.mosaic;
    mosaic.num_images = num_images;
    mosaic.output_file_name = output_file_name.trim().to_string();
    mosaic.jpeg_quality = jpeg_quality;
    mosaic.parallel_decode = parallel_decode;

    if *mosaic != current {
        save_settings(&config.settings, Path::new(SETTINGS_FILE))?;
        println!("\n{}", style("設定已儲存").green());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
