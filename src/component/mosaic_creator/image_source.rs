//! 影像來源
//!
//! 從資料夾找出影像檔，依檔名編號排序後解碼。無法解碼的檔案會略過並計數。

use crate::config::FileTypeTable;
use crate::error::{MosaicError, Result};
use crate::tools::{Frame, SortKey, decode_frame};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 依序載入的影像
#[derive(Debug, Default)]
pub struct LoadedImages {
    pub images: Vec<Frame>,
    /// 與 `images` 一一對應的來源路徑
    pub paths: Vec<PathBuf>,
    /// 解碼失敗而略過的檔案數
    pub skipped: usize,
}

impl LoadedImages {
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

pub struct ImageSource {
    file_type_table: FileTypeTable,
    parallel: bool,
    show_progress: bool,
    /// 不列入來源的檔案（通常是輸出檔本身）
    excluded: Option<PathBuf>,
}

impl ImageSource {
    #[must_use]
    pub const fn new(file_type_table: FileTypeTable) -> Self {
        Self {
            file_type_table,
            parallel: true,
            show_progress: false,
            excluded: None,
        }
    }

    /// 是否以 rayon 平行解碼（輸出順序不受影響）
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 排除指定檔案，避免上次輸出的馬賽克被當成來源影像
    #[must_use]
    pub fn with_excluded(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded = Some(path.into());
        self
    }

    /// 列出資料夾中的影像檔（不遞迴），依檔名編號排序
    ///
    /// 目錄先依檔名列出，再以穩定排序套用編號，
    /// 因此同鍵值（包含無編號）的檔案順序是固定的。
    pub fn discover(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let read_error = |source: std::io::Error| MosaicError::DirectoryRead {
            path: folder.to_path_buf(),
            source,
        };

        // WalkDir 不會對不存在的根目錄報錯以外的情況給出清楚訊息，先檢查一次
        std::fs::read_dir(folder).map_err(read_error)?;

        // 只有已存在的檔案才需要排除
        let excluded = self
            .excluded
            .as_deref()
            .and_then(|path| std::fs::canonicalize(path).ok());

        let mut files = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("略過無法讀取的項目: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.file_type_table.is_image_file(entry.path()) {
                continue;
            }
            let is_excluded = excluded.as_ref().is_some_and(|excluded| {
                std::fs::canonicalize(entry.path()).is_ok_and(|path| &path == excluded)
            });
            if is_excluded {
                debug!("略過輸出檔: {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }

        files.sort_by_key(|path| SortKey::from_path(path));
        debug!("找到 {} 個影像檔: {}", files.len(), folder.display());
        Ok(files)
    }

    /// 載入資料夾中所有可解碼的影像
    pub fn load(&self, folder: &Path) -> Result<LoadedImages> {
        let files = self.discover(folder)?;
        let progress_bar = self.progress_bar(files.len());

        let decode = |path: &PathBuf| {
            let frame = decode_frame(path);
            progress_bar.inc(1);
            frame
        };

        // collect 保留輸入順序，與完成順序無關
        let decoded: Vec<Option<Frame>> = if self.parallel {
            files.par_iter().map(decode).collect()
        } else {
            files.iter().map(decode).collect()
        };
        progress_bar.finish_and_clear();

        let mut loaded = LoadedImages::default();
        for (path, frame) in files.into_iter().zip(decoded) {
            match frame {
                Some(frame) => {
                    loaded.images.push(frame);
                    loaded.paths.push(path);
                }
                None => loaded.skipped += 1,
            }
        }

        if loaded.skipped > 0 {
            warn!("{} 個影像檔無法解碼，已略過", loaded.skipped);
        }
        info!(
            "已載入 {} 張影像（略過 {}）: {}",
            loaded.len(),
            loaded.skipped,
            folder.display()
        );

        Ok(loaded)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            progress_bar.set_style(style.progress_chars("#>-"));
        }
        progress_bar.set_message("解碼影像中...");
        progress_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    fn source() -> ImageSource {
        ImageSource::new(FileTypeTable::embedded().unwrap())
    }

    fn write_png(dir: &Path, name: &str, value: u8) {
        RgbImage::from_pixel(4, 3, Rgb([value, value, value]))
            .save(dir.join(name))
            .unwrap();
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_discover_orders_by_trailing_number() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["foo-3.png", "foo-1.png", "foo-2.png", "foo-10.png"] {
            write_png(temp_dir.path(), name, 0);
        }

        let files = source().discover(temp_dir.path()).unwrap();

        assert_eq!(
            file_names(&files),
            vec!["foo-1.png", "foo-2.png", "foo-3.png", "foo-10.png"]
        );
    }

    #[test]
    fn test_discover_filters_extensions_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "a-1.png", 0);
        fs::write(temp_dir.path().join("b-2.JPG"), b"x").unwrap();
        fs::write(temp_dir.path().join("c-3.JpEg"), b"x").unwrap();
        fs::write(temp_dir.path().join("notes-4.txt"), b"x").unwrap();
        fs::write(temp_dir.path().join("anim-5.gif"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("dir-6.png")).unwrap();

        let files = source().discover(temp_dir.path()).unwrap();

        assert_eq!(file_names(&files), vec!["a-1.png", "b-2.JPG", "c-3.JpEg"]);
    }

    #[test]
    fn test_discover_unnumbered_files_last_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["zeta.png", "alpha.png", "foo-2.png", "foo-1.png"] {
            write_png(temp_dir.path(), name, 0);
        }

        let files = source().discover(temp_dir.path()).unwrap();

        assert_eq!(
            file_names(&files),
            vec!["foo-1.png", "foo-2.png", "alpha.png", "zeta.png"]
        );
    }

    #[test]
    fn test_discover_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_png(&nested, "foo-1.png", 0);
        write_png(temp_dir.path(), "foo-2.png", 0);

        let files = source().discover(temp_dir.path()).unwrap();

        assert_eq!(file_names(&files), vec!["foo-2.png"]);
    }

    #[test]
    fn test_load_skips_undecodable_files() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "foo-1.png", 10);
        fs::write(temp_dir.path().join("foo-2.jpg"), b"corrupt").unwrap();
        write_png(temp_dir.path(), "foo-3.png", 30);

        let loaded = source().load(temp_dir.path()).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(file_names(&loaded.paths), vec!["foo-1.png", "foo-3.png"]);
        assert_eq!(loaded.images[0][[0, 0, 0]], 10);
        assert_eq!(loaded.images[1][[0, 0, 0]], 30);
        assert_eq!(loaded.images[0].dim(), (3, 4, 3));
    }

    #[test]
    fn test_parallel_and_sequential_load_agree() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..12u8 {
            write_png(temp_dir.path(), &format!("frame-{i}.png"), i * 10);
        }

        let parallel = source().with_parallel(true).load(temp_dir.path()).unwrap();
        let sequential = source().with_parallel(false).load(temp_dir.path()).unwrap();

        assert_eq!(parallel.paths, sequential.paths);
        assert_eq!(parallel.images, sequential.images);
        for (i, image) in parallel.images.iter().enumerate() {
            assert_eq!(image[[0, 0, 0]], i as u8 * 10);
        }
    }

    #[test]
    fn test_discover_skips_excluded_output() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "foo-1.png", 0);
        write_png(temp_dir.path(), "mosaic.png", 0);

        let files = source()
            .with_excluded(temp_dir.path().join("mosaic.png"))
            .discover(temp_dir.path())
            .unwrap();

        assert_eq!(file_names(&files), vec!["foo-1.png"]);
    }

    #[test]
    fn test_excluded_path_missing_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "foo-1.png", 0);

        let files = source()
            .with_excluded(temp_dir.path().join("mosaic.jpg"))
            .discover(temp_dir.path())
            .unwrap();

        assert_eq!(file_names(&files), vec!["foo-1.png"]);
    }

    #[test]
    fn test_load_misnamed_png_by_content() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "a-1.png", 40);
        fs::rename(temp_dir.path().join("a-1.png"), temp_dir.path().join("a-1.jpg")).unwrap();

        let loaded = source().load(temp_dir.path()).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.images[0][[0, 0, 0]], 40);
    }

    #[test]
    fn test_load_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = source().load(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, MosaicError::DirectoryRead { .. }));
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = source().load(temp_dir.path()).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.skipped, 0);
    }
}
