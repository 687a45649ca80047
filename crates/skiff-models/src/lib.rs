#![forbid(unsafe_code)]

//! Wire DTOs for the put.io HTTP API.
//!
//! These types mirror the JSON documents returned by the server and are
//! re-used by the HTTP client for request/response encoding so the mapping
//! stays a single source of truth. They carry no behaviour beyond small
//! computed accessors; every snapshot is a plain value that is replaced
//! wholesale on each fetch, never mutated in place.

use serde::{Deserialize, Serialize};

pub mod account;
pub mod auth;
pub mod event;
pub mod file;
pub mod friend;
pub mod share;
pub mod transfer;

pub use account::{AccountInfo, AccountSettings, DiskInfo};
pub use auth::AccessToken;
pub use event::Event;
pub use file::File;
pub use friend::Friend;
pub use share::{Share, ShareRecipient};
pub use transfer::{AddTransfer, StatusKind, Transfer, TransferId, TransferStatus};

/// Error document returned by the API on non-2xx responses.
///
/// The server reports failures as `{"status": "ERROR", "error_type": ...,
/// "error_message": ..., "status_code": ...}`. Every field is optional so a
/// malformed or truncated body still decodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    /// Machine-readable error class (e.g. `Unauthorized`).
    #[serde(default)]
    pub error_type: Option<String>,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Literal `"ERROR"` marker echoed by the server.
    #[serde(default)]
    pub status: Option<String>,
    /// HTTP status code repeated in the body.
    #[serde(default)]
    pub status_code: Option<u16>,
}
