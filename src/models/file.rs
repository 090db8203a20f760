//! File model for drive and trash listings.
//!
//! Represents entries from the /files endpoints.

use serde::{Deserialize, Serialize};

/// A stored file as reported by the listing API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    pub id: i64,
    /// Original file name (e.g., "report.pdf")
    pub name: String,
    /// Containing folder; None for files at the drive root
    #[serde(default)]
    pub folder_id: Option<i64>,
    /// File size in bytes, when the server includes it
    #[serde(default)]
    pub size: Option<u64>,
    /// Upload timestamp as ISO 8601 string, when the server includes it
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FileEntry {
    /// Format file size for display (e.g., "1.2 KB", "3.4 MB")
    pub fn format_size(&self) -> Option<String> {
        self.size.map(|bytes| {
            if bytes < 1024 {
                format!("{} B", bytes)
            } else if bytes < 1024 * 1024 {
                format!("{:.1} KB", bytes as f64 / 1024.0)
            } else if bytes < 1024 * 1024 * 1024 {
                format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
            } else {
                format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
            }
        })
    }

    /// Upload date formatted as "YYYY-MM-DD", when parseable.
    pub fn format_created(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        let parsed = chrono::DateTime::parse_from_rfc3339(raw).ok()?;
        Some(parsed.format("%Y-%m-%d").to_string())
    }
}
