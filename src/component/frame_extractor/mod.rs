//! 影片影格擷取元件
//!
//! 以 ffprobe 確認影片可開啟後，用 ffmpeg 逐幀輸出 `image_%05d.jpg`

mod extractor;
mod main;

pub use extractor::{ExtractionReport, extract_frames};
pub use main::FrameExtractor;
