//! File-sharing endpoint wrappers.

use serde::Deserialize;
use skiff_models::{Share, ShareRecipient};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::files::join_ids;

/// Wire keyword addressing every friend at once instead of a named subset.
const EVERYONE: &str = "everyone";

#[derive(Deserialize)]
struct ShareListEnvelope {
    #[serde(default)]
    shared: Vec<Share>,
}

#[derive(Deserialize)]
struct RecipientListEnvelope {
    #[serde(default, rename = "shared-with")]
    shared_with: Vec<ShareRecipient>,
}

impl ApiClient {
    /// Share files with the named friends.
    pub async fn share_files(&self, ids: &[i64], friends: &[&str]) -> ApiResult<()> {
        self.share_files_with(ids, &friends.join(",")).await
    }

    /// Share files with every friend at once.
    pub async fn share_files_with_everyone(&self, ids: &[i64]) -> ApiResult<()> {
        self.share_files_with(ids, EVERYONE).await
    }

    async fn share_files_with(&self, ids: &[i64], friends: &str) -> ApiResult<()> {
        self.post_form(
            "files/share",
            &[("file_ids", join_ids(ids)), ("friends", friends.to_string())],
        )
        .await
    }

    /// List the files this account shares, with recipient counts.
    pub async fn list_shares(&self) -> ApiResult<Vec<Share>> {
        let envelope: ShareListEnvelope = self.get_json("files/shared").await?;
        Ok(envelope.shared)
    }

    /// List the accounts one file is shared with. Each entry carries the
    /// share identifier that [`ApiClient::unshare_file`] takes.
    pub async fn share_recipients(&self, file_id: i64) -> ApiResult<Vec<ShareRecipient>> {
        let envelope: RecipientListEnvelope = self
            .get_json(&format!("files/{file_id}/shared-with"))
            .await?;
        Ok(envelope.shared_with)
    }

    /// Stop sharing a file with the given share identifiers.
    pub async fn unshare_file(&self, file_id: i64, share_ids: &[i64]) -> ApiResult<()> {
        self.post_form(
            &format!("files/{file_id}/unshare"),
            &[("shares", join_ids(share_ids))],
        )
        .await
    }

    /// Stop sharing a file with everyone it is shared with.
    pub async fn unshare_file_with_everyone(&self, file_id: i64) -> ApiResult<()> {
        self.post_form(
            &format!("files/{file_id}/unshare"),
            &[("shares", EVERYONE.to_string())],
        )
        .await
    }
}
