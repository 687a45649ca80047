//! Friend DTOs.

use serde::{Deserialize, Serialize};

/// Another account in the user's friend list, or the sender of a pending
/// friend request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    /// Identifier assigned by the server.
    #[serde(default)]
    pub id: i64,
    /// The friend's username. Friend operations address accounts by this
    /// name, not by identifier.
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_decodes_minimal_document() {
        let friend: Friend = serde_json::from_str(r#"{"name": "quux"}"#).expect("decode");
        assert_eq!(friend.name, "quux");
        assert!(friend.avatar_url.is_none());
    }
}
