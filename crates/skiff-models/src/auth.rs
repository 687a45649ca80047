//! OAuth token DTOs.

use serde::{Deserialize, Serialize};

/// Access token returned by the OAuth code exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// Bearer token to present on authenticated requests.
    pub access_token: String,
    /// Token scheme; the server reports `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}
