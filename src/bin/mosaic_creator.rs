//! 從資料夾中的影像建立馬賽克

use clap::Parser;
use frame_mosaic::MosaicError;
use frame_mosaic::component::mosaic_creator::{MosaicOptions, MosaicPipeline};
use frame_mosaic::config::{DEFAULT_JPEG_QUALITY, DEFAULT_NUM_IMAGES, DEFAULT_OUTPUT, FileTypeTable};
use frame_mosaic::init;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "mosaic_creator",
    version,
    about = "Create an image mosaic from a folder of images."
)]
struct Args {
    /// Path to the folder containing images.
    folder: PathBuf,

    /// Number of images to include in the mosaic.
    #[arg(long = "num_images", alias = "num-images", default_value_t = DEFAULT_NUM_IMAGES)]
    num_images: usize,

    /// Output path for the mosaic image.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// JPEG quality (1-100), ignored for other formats.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Decode images one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init::init_cli(args.verbose);

    let file_type_table = match FileTypeTable::embedded() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = MosaicOptions {
        target_count: args.num_images,
        output_path: args.output,
        jpeg_quality: args.quality,
        parallel_decode: !args.sequential,
        show_progress: !args.verbose,
    };

    match MosaicPipeline::new(file_type_table, options).run(&args.folder) {
        Ok(report) => {
            if report.skipped > 0 {
                println!("Skipped {} unreadable image(s).", report.skipped);
            }
            println!(
                "Mosaic of {} images ({}x{} grid, {}x{} px) saved to {}",
                report.sampled,
                report.grid_side,
                report.grid_side,
                report.mosaic_shape.1,
                report.mosaic_shape.0,
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &MosaicError) -> ExitCode {
    debug!("{e:?}");
    eprintln!("Error: {e}");
    ExitCode::from(e.exit_code())
}
