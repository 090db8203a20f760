//! Local filesystem locations used by the client.
//!
//! The client keeps its data directory under `~/.cloudvault` (log file lives
//! there, next to the credentials), saves downloads into the user's download
//! directory, and stages previews in a temp subdirectory.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for local storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Home directory could not be determined
    #[error("Could not determine the home directory")]
    NoHomeDirectory,
}

/// Get the base data directory (`~/.cloudvault`), creating it if needed.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoHomeDirectory)?;
    let dir = home.join(".cloudvault");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Path of the client log file inside the data directory.
pub fn log_file_path() -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join("cloudvault.log"))
}

/// Directory where downloads are saved.
///
/// Prefers the platform download directory, falls back to `~/Downloads`,
/// then the current directory.
pub fn downloads_dir() -> PathBuf {
    if let Some(dir) = dirs::download_dir() {
        return dir;
    }
    if let Some(home) = dirs::home_dir() {
        return home.join("Downloads");
    }
    PathBuf::from(".")
}

/// Save a downloaded payload under its original file name.
///
/// An existing file is never overwritten; " (1)", " (2)", ... is appended to
/// the stem until a free name is found. Returns the path written.
pub fn save_download(dir: &PathBuf, name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let target = unique_path(dir, name);
    fs::write(&target, bytes)?;
    Ok(target)
}

/// Stage a payload for preview in the temp directory and return its path.
pub fn stage_preview(name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
    let dir = std::env::temp_dir().join("cloudvault-preview");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let target = unique_path(&dir, name);
    fs::write(&target, bytes)?;
    Ok(target)
}

/// First non-existing path for `name` inside `dir`.
fn unique_path(dir: &PathBuf, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), Some(ext.to_string())),
        _ => (name.to_string(), None),
    };

    let mut counter = 1u32;
    loop {
        let candidate_name = match &ext {
            Some(ext) => format!("{} ({}).{}", stem, counter, ext),
            None => format!("{} ({})", stem, counter),
        };
        let candidate = dir.join(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
