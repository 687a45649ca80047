//! File and folder DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Content type the server reports for folders.
const FOLDER_CONTENT_TYPE: &str = "application/x-directory";

/// A stored file or folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct File {
    /// Identifier assigned by the server.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Identifier of the containing folder; `0` is the root directory.
    #[serde(default)]
    pub parent_id: i64,
    /// MIME type; folders report `application/x-directory`.
    #[serde(default)]
    pub content_type: String,
    /// CRC32 checksum of the content, when computed.
    #[serde(default)]
    pub crc32: Option<String>,
    /// Size in bytes; `0` for folders.
    #[serde(default)]
    pub size: u64,
    /// When the entry was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// When the entry was first accessed, if ever.
    #[serde(default)]
    pub first_accessed_at: Option<NaiveDateTime>,
    /// Icon URL for the entry.
    #[serde(default)]
    pub icon: Option<String>,
    /// Screenshot URL for video content, when available.
    #[serde(default)]
    pub screenshot: Option<String>,
    /// Whether an MP4 conversion exists for the file.
    #[serde(default)]
    pub is_mp4_available: bool,
    /// Whether the entry is shared with other accounts.
    #[serde(default)]
    pub is_shared: bool,
    /// OpenSubtitles hash for video content, when computed.
    #[serde(default)]
    pub opensubtitles_hash: Option<String>,
}

impl File {
    /// Whether this entry is a folder.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.content_type == FOLDER_CONTENT_TYPE
    }
}
