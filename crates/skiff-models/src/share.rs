//! File-sharing DTOs.

use serde::{Deserialize, Serialize};

/// One entry of the shared-files listing: a file the account shares,
/// with a recipient count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Share {
    /// Identifier of the shared file.
    pub file_id: i64,
    /// Display name of the shared file.
    #[serde(default)]
    pub file_name: String,
    /// Number of accounts the file is shared with.
    #[serde(default)]
    pub shared_with: u32,
}

/// An account a specific file is shared with. The `share_id` is what
/// unsharing operations take, not the user's account identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareRecipient {
    /// Identifier of the share itself.
    pub share_id: i64,
    /// Username of the recipient.
    #[serde(default)]
    pub user_name: String,
    /// Recipient's avatar image URL.
    #[serde(default)]
    pub user_avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_carries_the_share_identifier() {
        let raw = r#"{"share_id": 91, "user_name": "quux",
                      "user_avatar_url": "https://example.com/a.png"}"#;
        let recipient: ShareRecipient = serde_json::from_str(raw).expect("decode");
        assert_eq!(recipient.share_id, 91);
        assert_eq!(recipient.user_name, "quux");
    }

    #[test]
    fn share_listing_entry_decodes() {
        let share: Share =
            serde_json::from_str(r#"{"file_id": 5, "file_name": "movie.mkv", "shared_with": 2}"#)
                .expect("decode");
        assert_eq!(share.shared_with, 2);
    }
}
