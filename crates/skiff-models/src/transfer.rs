//! Transfer DTOs and status classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Opaque transfer identifier assigned by the server.
pub type TransferId = i64;

/// Request payload for starting a new transfer.
///
/// The source link may be a magnet URI, a `.torrent` URL, or a direct file
/// URL; the server decides how to fetch it. Each submission creates a fresh
/// job; the server does not deduplicate by source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTransfer {
    /// Link to the content that should be transferred.
    pub url: String,
    /// Identifier of the folder the finished transfer is saved into.
    /// `0` addresses the root directory.
    #[serde(default)]
    pub save_parent_id: i64,
    /// Optional URL the server POSTs the transfer metadata to on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl AddTransfer {
    /// Build a request targeting the root directory with no callback.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            save_parent_id: 0,
            callback_url: None,
        }
    }

    /// Select the destination folder for the finished transfer.
    #[must_use]
    pub fn save_to(mut self, parent_id: i64) -> Self {
        self.save_parent_id = parent_id;
        self
    }

    /// Attach a server-side completion callback URL.
    #[must_use]
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

/// Lifecycle states reported by the server for a transfer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// Accepted but not yet started.
    InQueue,
    /// Actively fetching content.
    Downloading,
    /// Download finished; the server is finalising the files.
    Completing,
    /// Download finished; the transfer keeps uploading to peers.
    Seeding,
    /// Finished successfully.
    Completed,
    /// Ended in failure; `error_message` on the transfer carries the cause.
    Error,
}

/// Coarse classification of a [`TransferStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The transfer is still running and will report further progress.
    Active,
    /// Terminal: the transfer finished successfully.
    Success,
    /// Terminal: the transfer failed.
    Failed,
}

impl TransferStatus {
    /// Classify this status. Total and pure: every variant maps to exactly
    /// one [`StatusKind`].
    ///
    /// `Seeding` classifies as [`StatusKind::Active`] because a seeding
    /// transfer still reports transfer statistics.
    #[must_use]
    pub const fn kind(self) -> StatusKind {
        match self {
            Self::InQueue | Self::Downloading | Self::Completing | Self::Seeding => {
                StatusKind::Active
            }
            Self::Completed => StatusKind::Success,
            Self::Error => StatusKind::Failed,
        }
    }

    /// Whether no further state change will occur after this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self.kind(), StatusKind::Active)
    }

    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InQueue => "IN_QUEUE",
            Self::Downloading => "DOWNLOADING",
            Self::Completing => "COMPLETING",
            Self::Seeding => "SEEDING",
            Self::Completed => "COMPLETED",
            Self::Error => "ERROR",
        }
    }
}

/// Snapshot of a transfer's reported state at one poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    /// Transfer identifier assigned by the server.
    pub id: TransferId,
    /// Name of the content being transferred.
    #[serde(default)]
    pub name: String,
    /// Current lifecycle status.
    pub status: TransferStatus,
    /// Total size in bytes; `0` until the server resolves the source.
    #[serde(default)]
    pub size: u64,
    /// Bytes downloaded since the transfer started.
    #[serde(default)]
    pub downloaded: u64,
    /// Bytes uploaded since the transfer started.
    #[serde(default)]
    pub uploaded: u64,
    /// Completion percentage as reported by the server (0-100).
    #[serde(default)]
    pub percent_done: u8,
    /// Estimated seconds until the download completes.
    #[serde(default)]
    pub estimated_time: Option<u64>,
    /// Current download speed in bytes per second.
    #[serde(default)]
    pub down_speed: f64,
    /// Current upload speed in bytes per second.
    #[serde(default)]
    pub up_speed: f64,
    /// Folder the finished transfer is saved into.
    #[serde(default)]
    pub save_parent_id: i64,
    /// Identifier of the produced file once the transfer finishes.
    #[serde(default)]
    pub file_id: Option<i64>,
    /// Source link (magnet or otherwise) the transfer was created from.
    #[serde(default)]
    pub source: Option<String>,
    /// URL the server POSTs completion metadata to, when configured.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// When the transfer was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// When the transfer ended, for terminal statuses.
    #[serde(default)]
    pub finished_at: Option<NaiveDateTime>,
    /// Failure cause; populated only when `status` is [`TransferStatus::Error`].
    #[serde(default)]
    pub error_message: Option<String>,
    /// Unlocalised human-readable progress summary.
    #[serde(default)]
    pub status_message: Option<String>,
    /// Message reported by the tracker, if any.
    #[serde(default)]
    pub tracker_message: Option<String>,
    /// Whether the transfer is private.
    #[serde(default)]
    pub is_private: bool,
    /// Whether the server extracts archives after the download finishes.
    #[serde(default)]
    pub extract: bool,
    /// Subscription that instigated the transfer, when applicable.
    #[serde(default)]
    pub subscription_id: Option<i64>,
    /// Seconds the transfer has been seeding.
    #[serde(default)]
    pub seconds_seeding: Option<u64>,
    /// Share ratio (uploaded/downloaded) reported by the server.
    #[serde(default)]
    pub current_ratio: f64,
    /// Total peers connected to the transfer.
    #[serde(default)]
    pub peers_connected: u32,
    /// Peers fetching from the server.
    #[serde(default)]
    pub peers_getting_from_us: u32,
    /// Peers uploading to the server.
    #[serde(default)]
    pub peers_sending_to_us: u32,
}

impl Transfer {
    /// Classify the snapshot's status.
    #[must_use]
    pub const fn status_kind(&self) -> StatusKind {
        self.status.kind()
    }

    /// Completion percentage computed from byte counters.
    ///
    /// Matches `percent_done` for well-formed snapshots but stays defined
    /// when the server has not resolved the total size yet.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            (to_f64(self.downloaded) / to_f64(self.size)) * 100.0
        }
    }

    /// Whether the transfer is currently seeding.
    #[must_use]
    pub fn is_seeding(&self) -> bool {
        self.status == TransferStatus::Seeding
    }
}

impl Default for Transfer {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            status: TransferStatus::InQueue,
            size: 0,
            downloaded: 0,
            uploaded: 0,
            percent_done: 0,
            estimated_time: None,
            down_speed: 0.0,
            up_speed: 0.0,
            save_parent_id: 0,
            file_id: None,
            source: None,
            callback_url: None,
            created_at: None,
            finished_at: None,
            error_message: None,
            status_message: None,
            tracker_message: None,
            is_private: false,
            extract: false,
            subscription_id: None,
            seconds_seeding: None,
            current_ratio: 0.0,
            peers_connected: 0,
            peers_getting_from_us: 0,
            peers_sending_to_us: 0,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "byte counters stay far below 2^53 so the percentage is exact enough"
)]
const fn to_f64(value: u64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [TransferStatus; 6] = [
        TransferStatus::InQueue,
        TransferStatus::Downloading,
        TransferStatus::Completing,
        TransferStatus::Seeding,
        TransferStatus::Completed,
        TransferStatus::Error,
    ];

    #[test]
    fn classification_is_total() {
        for status in ALL_STATUSES {
            match status.kind() {
                StatusKind::Active => assert!(!status.is_terminal()),
                StatusKind::Success | StatusKind::Failed => assert!(status.is_terminal()),
            }
        }
    }

    #[test]
    fn seeding_classifies_as_active() {
        assert_eq!(TransferStatus::Seeding.kind(), StatusKind::Active);
        assert!(!TransferStatus::Seeding.is_terminal());
    }

    #[test]
    fn only_completed_and_error_are_terminal() {
        let terminal: Vec<_> = ALL_STATUSES
            .into_iter()
            .filter(|status| status.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![TransferStatus::Completed, TransferStatus::Error]
        );
    }

    #[test]
    fn status_uses_screaming_snake_wire_names() {
        for status in ALL_STATUSES {
            let encoded = serde_json::to_string(&status).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
        }
        let decoded: TransferStatus = serde_json::from_str("\"IN_QUEUE\"").expect("decode");
        assert_eq!(decoded, TransferStatus::InQueue);
    }

    #[test]
    fn percent_complete_handles_unresolved_size() {
        let unresolved = Transfer::default();
        assert!(unresolved.percent_complete().abs() < f64::EPSILON);

        let half = Transfer {
            size: 10,
            downloaded: 5,
            ..Transfer::default()
        };
        assert!((half.percent_complete() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn transfer_decodes_server_document() {
        let raw = r#"{
            "id": 41,
            "name": "Example.iso",
            "status": "DOWNLOADING",
            "size": 2147483648,
            "downloaded": 1073741824,
            "uploaded": 0,
            "percent_done": 50,
            "estimated_time": 120,
            "down_speed": 8388608,
            "up_speed": 0,
            "save_parent_id": 0,
            "source": "magnet:?xt=urn:btih:example",
            "created_at": "2018-04-12T21:12:42",
            "is_private": false,
            "peers_connected": 12,
            "peers_getting_from_us": 2,
            "peers_sending_to_us": 10
        }"#;
        let transfer: Transfer = serde_json::from_str(raw).expect("decode");
        assert_eq!(transfer.id, 41);
        assert_eq!(transfer.status, TransferStatus::Downloading);
        assert_eq!(transfer.status_kind(), StatusKind::Active);
        assert_eq!(transfer.percent_done, 50);
        assert!(transfer.error_message.is_none());
        assert!(transfer.created_at.is_some());
    }

    #[test]
    fn add_transfer_builder_sets_fields() {
        let request = AddTransfer::new("magnet:?xt=urn:btih:example")
            .save_to(77)
            .with_callback_url("https://example.com/done");
        assert_eq!(request.save_parent_id, 77);
        assert_eq!(request.callback_url.as_deref(), Some("https://example.com/done"));

        let encoded = serde_json::to_string(&AddTransfer::new("magnet:x")).expect("encode");
        assert!(!encoded.contains("callback_url"));
    }
}
