//! 將影片逐幀輸出為 `image_%05d.jpg`

use clap::Parser;
use frame_mosaic::component::frame_extractor::extract_frames;
use frame_mosaic::init;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "extract_frames",
    version,
    about = "Extract frames from a video and save them as images."
)]
struct Args {
    /// Path to the input video file.
    video_path: PathBuf,

    /// Path to the folder to save the extracted frames.
    output_folder: PathBuf,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init::init_cli(args.verbose);

    match extract_frames(&args.video_path, &args.output_folder) {
        Ok(report) => {
            println!("Extracted {} frames from the video.", report.frame_count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
