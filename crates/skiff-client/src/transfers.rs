//! Transfer endpoint wrappers and the production [`TransferSource`].

use async_trait::async_trait;
use serde::Deserialize;
use skiff_models::{AddTransfer, Transfer, TransferId};
use skiff_monitor::TransferSource;

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Deserialize)]
struct TransferEnvelope {
    transfer: Transfer,
}

#[derive(Deserialize)]
struct TransferListEnvelope {
    transfers: Vec<Transfer>,
}

impl ApiClient {
    /// Start a new transfer. One-shot: every call creates a fresh job and
    /// the server assigns its identifier. The returned snapshot carries the
    /// initial metadata; poll [`ApiClient::transfer`] for updates.
    pub async fn add_transfer(&self, request: &AddTransfer) -> ApiResult<Transfer> {
        let envelope: TransferEnvelope = self.post_json("transfers/add", request).await?;
        Ok(envelope.transfer)
    }

    /// Fetch the current snapshot of one transfer. Idempotent read.
    pub async fn transfer(&self, id: TransferId) -> ApiResult<Transfer> {
        let envelope: TransferEnvelope = self.get_json(&format!("transfers/{id}")).await?;
        Ok(envelope.transfer)
    }

    /// List transfers. Completed transfers drop off this list once cleaned.
    pub async fn list_transfers(&self) -> ApiResult<Vec<Transfer>> {
        let envelope: TransferListEnvelope = self.get_json("transfers/list").await?;
        Ok(envelope.transfers)
    }

    /// Retry a previously failed transfer.
    pub async fn retry_transfer(&self, id: TransferId) -> ApiResult<()> {
        self.post_form("transfers/retry", &[("id", id.to_string())])
            .await
    }

    /// Cancel and delete the given transfers.
    pub async fn cancel_transfers(&self, ids: &[TransferId]) -> ApiResult<()> {
        self.post_form("transfers/cancel", &[("transfer_ids", join_ids(ids))])
            .await
    }

    /// Remove completed transfers from the list.
    pub async fn clean_transfers(&self) -> ApiResult<()> {
        self.post_empty("transfers/clean").await
    }
}

#[async_trait]
impl TransferSource for ApiClient {
    async fn create(&self, request: &AddTransfer) -> anyhow::Result<Transfer> {
        Ok(self.add_transfer(request).await?)
    }

    async fn fetch(&self, id: TransferId) -> anyhow::Result<Transfer> {
        Ok(self.transfer(id).await?)
    }
}

fn join_ids(ids: &[TransferId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
