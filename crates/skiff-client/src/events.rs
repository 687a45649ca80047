//! Activity feed endpoint wrappers.

use serde::Deserialize;
use skiff_models::Event;

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Deserialize)]
struct EventListEnvelope {
    #[serde(default)]
    events: Vec<Event>,
}

impl ApiClient {
    /// List the account's activity feed, newest first.
    pub async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let envelope: EventListEnvelope = self.get_json("events/list").await?;
        Ok(envelope.events)
    }

    /// Clear the whole activity feed. There is no per-entry delete.
    pub async fn clear_events(&self) -> ApiResult<()> {
        self.post_empty("events/delete").await
    }
}
