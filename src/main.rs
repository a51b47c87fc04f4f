use anyhow::Result;
use console::{Term, style};
use frame_mosaic::config::Config;
use frame_mosaic::init;
use frame_mosaic::menu::show_main_menu;
use log::{info, warn};

fn main() -> Result<()> {
    // 互動介面只顯示警告以上，避免干擾選單
    init::init("warn");
    let term = Term::stdout();

    let mut config = Config::new()?;

    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style("再見！").green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("錯誤:").red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
