//! Friend endpoint wrappers.
//!
//! Friend operations address accounts by username. Unfriending also removes
//! files shared with that friend from their directory, server-side.

use serde::Deserialize;
use skiff_models::Friend;

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Deserialize)]
struct FriendListEnvelope {
    #[serde(default)]
    friends: Vec<Friend>,
}

impl ApiClient {
    /// List the account's friends.
    pub async fn list_friends(&self) -> ApiResult<Vec<Friend>> {
        let envelope: FriendListEnvelope = self.get_json("friends/list").await?;
        Ok(envelope.friends)
    }

    /// List incoming friend requests awaiting a decision.
    pub async fn friend_requests(&self) -> ApiResult<Vec<Friend>> {
        let envelope: FriendListEnvelope = self.get_json("friends/waiting-requests").await?;
        Ok(envelope.friends)
    }

    /// Send a friend request to the named account.
    pub async fn send_friend_request(&self, username: &str) -> ApiResult<()> {
        self.post_empty(&format!("friends/{username}/request")).await
    }

    /// Approve a pending friend request from the named account.
    pub async fn approve_friend_request(&self, username: &str) -> ApiResult<()> {
        self.post_empty(&format!("friends/{username}/approve")).await
    }

    /// Deny a pending friend request from the named account.
    pub async fn deny_friend_request(&self, username: &str) -> ApiResult<()> {
        self.post_empty(&format!("friends/{username}/deny")).await
    }

    /// Remove the named account from the friend list.
    pub async fn unfriend(&self, username: &str) -> ApiResult<()> {
        self.post_empty(&format!("friends/{username}/unfriend")).await
    }
}
