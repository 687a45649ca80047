//! Account information and settings DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account details returned by `/account/info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    /// Account username.
    pub username: String,
    /// Registered e-mail address.
    #[serde(default)]
    pub mail: String,
    /// When the current plan expires, for paid accounts.
    #[serde(default)]
    pub plan_expiration_date: Option<NaiveDateTime>,
    /// Subtitle languages configured for the account.
    #[serde(default)]
    pub subtitle_languages: Vec<String>,
    /// Preferred subtitle language code.
    #[serde(default)]
    pub default_subtitle_language: Option<String>,
    /// Storage quota snapshot.
    #[serde(default)]
    pub disk: DiskInfo,
}

/// Storage quota breakdown in bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DiskInfo {
    /// Bytes still available.
    #[serde(default)]
    pub avail: u64,
    /// Bytes in use.
    #[serde(default)]
    pub used: u64,
    /// Total quota.
    #[serde(default)]
    pub size: u64,
}

/// Mutable preferences returned by `/account/settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountSettings {
    /// Folder new transfers are saved into by default.
    #[serde(default)]
    pub default_download_folder: i64,
    /// Whether the account is hidden from friend lookups.
    #[serde(default)]
    pub is_invisible: bool,
    /// Subtitle languages configured for the account.
    #[serde(default)]
    pub subtitle_languages: Vec<String>,
    /// Preferred subtitle language code.
    #[serde(default)]
    pub default_subtitle_language: Option<String>,
}
