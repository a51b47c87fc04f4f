//! 依檔名中的編號排序影格
//!
//! 編號取檔名最後一個 `.` 前緊鄰的數字：`foo-3.jpg` → 3，`image_00012.jpg` → 12。
//! 數字前不要求 `-`，`foo_3.jpg` 同樣取得 3。
//! 沒有編號的檔案一律排在最後。

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 影格檔名前綴
pub const FRAME_PREFIX: &str = "image_";
/// 影格編號補零位數
pub const FRAME_NAME_DIGITS: usize = 5;
/// 影格檔案副檔名
pub const FRAME_EXTENSION: &str = "jpg";

static REGEX_TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\.[^.]*$").expect("Invalid regex"));

static REGEX_FRAME_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image_[0-9]{5,}\.jpg$").expect("Invalid regex"));

/// 排序鍵，無編號者視為無限大
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Numbered(u64),
    Unnumbered,
}

impl SortKey {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(frame_number)
            .map_or(Self::Unnumbered, Self::Numbered)
    }
}

/// 取出檔名尾端的編號；超出 u64 範圍視為無編號
#[must_use]
pub fn frame_number(file_name: &str) -> Option<u64> {
    REGEX_TRAILING_NUMBER
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// 第 `index` 張影格的檔名，例如 `image_00007.jpg`
#[must_use]
pub fn frame_file_name(index: usize) -> String {
    format!("{FRAME_PREFIX}{index:0width$}.{FRAME_EXTENSION}", width = FRAME_NAME_DIGITS)
}

/// ffmpeg 輸出樣板，例如 `image_%05d.jpg`
#[must_use]
pub fn frame_file_pattern() -> String {
    format!("{FRAME_PREFIX}%0{FRAME_NAME_DIGITS}d.{FRAME_EXTENSION}")
}

#[must_use]
pub fn is_frame_file(file_name: &str) -> bool {
    REGEX_FRAME_FILE.is_match(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_frame_number_dash_suffix() {
        assert_eq!(frame_number("foo-3.jpg"), Some(3));
        assert_eq!(frame_number("foo-120.PNG"), Some(120));
    }

    #[test]
    fn test_frame_number_extracted_frames() {
        assert_eq!(frame_number("image_00000.jpg"), Some(0));
        assert_eq!(frame_number("image_00042.jpg"), Some(42));
        assert_eq!(frame_number("foo_3.jpg"), Some(3));
    }

    #[test]
    fn test_frame_number_uses_final_dot() {
        assert_eq!(frame_number("clip-1.take-7.jpg"), Some(7));
        assert_eq!(frame_number("shot2.final.jpg"), None);
    }

    #[test]
    fn test_frame_number_missing() {
        assert_eq!(frame_number("cover.jpg"), None);
        assert_eq!(frame_number("no_extension"), None);
        assert_eq!(frame_number("foo-.jpg"), None);
    }

    #[test]
    fn test_frame_number_overflow_is_unnumbered() {
        assert_eq!(frame_number("foo-99999999999999999999999.jpg"), None);
    }

    #[test]
    fn test_sort_key_unnumbered_sorts_last() {
        let mut paths = [
            PathBuf::from("cover.jpg"),
            PathBuf::from("foo-3.jpg"),
            PathBuf::from("foo-1.jpg"),
            PathBuf::from(format!("foo-{}.jpg", u64::MAX)),
        ];
        paths.sort_by_key(|p| SortKey::from_path(p));

        assert_eq!(paths[0], PathBuf::from("foo-1.jpg"));
        assert_eq!(paths[1], PathBuf::from("foo-3.jpg"));
        assert_eq!(paths[3], PathBuf::from("cover.jpg"));
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0), "image_00000.jpg");
        assert_eq!(frame_file_name(123), "image_00123.jpg");
        assert_eq!(frame_file_pattern(), "image_%05d.jpg");
        assert!(is_frame_file("image_00123.jpg"));
        assert!(is_frame_file("image_123456.jpg"));
        assert!(!is_frame_file("image_12.jpg"));
        assert!(!is_frame_file("foo-1.jpg"));
    }
}
