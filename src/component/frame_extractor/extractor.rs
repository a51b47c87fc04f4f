use crate::error::{MosaicError, Result};
use crate::tools::{
    VideoInfo, ensure_directory_exists, frame_file_pattern, get_video_info, is_frame_file,
};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// 影格擷取結果
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub frame_count: u64,
    pub output_dir: PathBuf,
    pub video: VideoInfo,
}

/// 將影片的每一幀存成 `image_00000.jpg`、`image_00001.jpg`…
///
/// 先以 ffprobe 確認影片可開啟，之後才建立輸出資料夾，
/// 因此來源無法開啟時不會寫入任何影格。
pub fn extract_frames(video_path: &Path, output_dir: &Path) -> Result<ExtractionReport> {
    let video = get_video_info(video_path)?;
    debug!(
        "影片資訊: {}x{}, {:.2} fps, {:.1}s",
        video.width, video.height, video.frame_rate, video.duration_seconds
    );

    ensure_directory_exists(output_dir)?;

    let output = build_command(video_path, output_dir)
        .output()
        .map_err(|e| MosaicError::FrameExtraction {
            reason: format!("failed to run ffmpeg: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MosaicError::FrameExtraction {
            reason: format!("ffmpeg exited with {}: {}", output.status, stderr.trim()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let frame_count = match parse_progress_frame_count(&stdout) {
        Some(count) => count,
        None => {
            warn!("ffmpeg 未回報影格數，改為計算輸出檔案");
            count_frame_files(output_dir)?
        }
    };

    info!(
        "已擷取 {frame_count} 幀: {} → {}",
        video_path.display(),
        output_dir.display()
    );

    Ok(ExtractionReport {
        frame_count,
        output_dir: output_dir.to_path_buf(),
        video,
    })
}

/// 每個解碼出的影格輸出一張 JPEG，從 0 開始編號
fn build_command(video_path: &Path, output_dir: &Path) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-hide_banner", "-nostdin", "-loglevel", "error", "-i"])
        .arg(video_path)
        .args([
            "-map",
            "0:v:0",
            "-an",
            "-sn",
            "-dn",
            "-fps_mode",
            "passthrough",
            "-start_number",
            "0",
            "-q:v",
            "2",
            "-progress",
            "pipe:1",
            "-nostats",
            "-y",
        ])
        .arg(output_dir.join(frame_file_pattern()));
    cmd
}

/// 取 `-progress` 輸出中最後一個 `frame=N`
fn parse_progress_frame_count(progress: &str) -> Option<u64> {
    progress
        .lines()
        .filter_map(|line| line.trim().strip_prefix("frame="))
        .filter_map(|value| value.trim().parse().ok())
        .last()
}

fn count_frame_files(output_dir: &Path) -> Result<u64> {
    let entries = std::fs::read_dir(output_dir).map_err(|source| MosaicError::DirectoryRead {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let count = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_name().to_str().is_some_and(is_frame_file))
        .count();
    Ok(count as u64)
}
