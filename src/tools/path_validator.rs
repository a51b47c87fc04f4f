use crate::error::{MosaicError, Result};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    let not_found = |message: &str| MosaicError::DirectoryRead {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, message.to_string()),
    };

    if !path.exists() {
        return Err(not_found("path does not exist"));
    }
    if !path.is_dir() {
        return Err(not_found("path is not a directory"));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| MosaicError::io(path, e))?;
    }
    Ok(())
}
