//! Account endpoint wrappers.

use serde::Deserialize;
use skiff_models::{AccountInfo, AccountSettings};

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Deserialize)]
struct InfoEnvelope {
    info: AccountInfo,
}

#[derive(Deserialize)]
struct SettingsEnvelope {
    settings: AccountSettings,
}

impl ApiClient {
    /// Fetch the authenticated account's details and quota.
    pub async fn account_info(&self) -> ApiResult<AccountInfo> {
        let envelope: InfoEnvelope = self.get_json("account/info").await?;
        Ok(envelope.info)
    }

    /// Fetch the authenticated account's preferences.
    pub async fn account_settings(&self) -> ApiResult<AccountSettings> {
        let envelope: SettingsEnvelope = self.get_json("account/settings").await?;
        Ok(envelope.settings)
    }

    /// Replace the authenticated account's preferences.
    pub async fn update_account_settings(&self, settings: &AccountSettings) -> ApiResult<()> {
        let _: serde_json::Value = self.post_json("account/settings", settings).await?;
        Ok(())
    }
}
