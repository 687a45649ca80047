//! Activity feed DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry of the account's activity feed: a finished download, a file
/// shared with the account, and similar notifications.
///
/// The feed grows new entry kinds server-side, so `kind` stays an open
/// string rather than a closed enum; unknown kinds still decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Identifier assigned by the server.
    #[serde(default)]
    pub id: i64,
    /// Event kind as reported on the wire, e.g. `transfer_completed` or
    /// `file_shared`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the transfer or file the event describes.
    #[serde(default)]
    pub transfer_name: Option<String>,
    /// Identifier of the file associated with the event.
    #[serde(default)]
    pub file_id: Option<i64>,
    /// Size of the associated file in bytes.
    #[serde(default)]
    pub transfer_size: Option<u64>,
    /// For `file_shared` events, the username of the sharer.
    #[serde(default)]
    pub user_name: Option<String>,
    /// When the event was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Event {
    /// Whether this event describes a file shared with the account.
    #[must_use]
    pub fn is_share(&self) -> bool {
        self.kind == "file_shared"
    }
}
