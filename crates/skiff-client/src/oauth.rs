//! OAuth authorization-code flow helpers.
//!
//! The flow is the standard three-legged exchange: navigate the user to
//! [`OauthFlow::sign_in_url`] in some browser or web view, receive the
//! `code` on the registered redirect URI, and trade it for a token with
//! [`OauthFlow::exchange_code`]. The resulting [`AccessToken`] feeds an
//! [`crate::AuthContext`]; persisting it is the caller's concern.

use std::time::Duration;

use reqwest::Client;
use skiff_models::AccessToken;
use url::Url;
use tracing::debug;

use crate::client::{DEFAULT_BASE_URL, read_json};
use crate::error::{ApiError, ApiResult};

const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Application registration details issued by the service.
#[derive(Debug, Clone)]
pub struct OauthConfig {
    /// Client identifier of the registered application.
    pub client_id: String,
    /// Application secret of the registered application.
    pub client_secret: String,
    /// Redirect URI the authorization code is delivered to. Must match the
    /// registration exactly.
    pub redirect_uri: String,
}

/// Stateless driver for the authorization-code flow.
#[derive(Debug, Clone)]
pub struct OauthFlow {
    config: OauthConfig,
    http: Client,
    base_url: Url,
}

impl OauthFlow {
    /// Build a flow against the production service.
    pub fn new(config: OauthConfig) -> ApiResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::with_base_url(config, base_url)
    }

    /// Build a flow against an explicit base URL (testing, staging).
    pub fn with_base_url(config: OauthConfig, base_url: Url) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(EXCHANGE_TIMEOUT)
            .build()
            .map_err(|source| ApiError::Transport { source })?;
        Ok(Self {
            config,
            http,
            base_url,
        })
    }

    /// URL the user must visit to authorize the application. Completing the
    /// sign-in delivers a `code` to the redirect URI.
    pub fn sign_in_url(&self) -> ApiResult<Url> {
        let mut url = self.join("oauth2/authenticate")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.config.redirect_uri);
        Ok(url)
    }

    /// Trade an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> ApiResult<AccessToken> {
        let mut url = self.join("oauth2/access_token")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", &self.config.client_secret)
            .append_pair("grant_type", "authorization_code")
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("code", code);

        debug!(%url, "exchanging authorization code");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        read_json(response).await
    }

    fn join(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::invalid_request(format!("bad endpoint path '{path}': {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;

    fn test_config() -> OauthConfig {
        OauthConfig {
            client_id: "1234".to_string(),
            client_secret: "shhh".to_string(),
            redirect_uri: "skiff://oauth".to_string(),
        }
    }

    #[test]
    fn sign_in_url_carries_the_registration() {
        let flow = OauthFlow::new(test_config()).expect("build flow");
        let url = flow.sign_in_url().expect("sign-in URL");
        assert_eq!(url.path(), "/v2/oauth2/authenticate");
        let query: Vec<_> = url.query_pairs().collect();
        assert!(query.contains(&("client_id".into(), "1234".into())));
        assert!(query.contains(&("response_type".into(), "code".into())));
        assert!(query.contains(&("redirect_uri".into(), "skiff://oauth".into())));
    }

    #[tokio::test]
    async fn exchange_code_returns_the_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/oauth2/access_token")
                .query_param("grant_type", "authorization_code")
                .query_param("code", "CODE123");
            then.status(200)
                .json_body(serde_json::json!({"access_token": "TOKEN456"}));
        });

        let flow = OauthFlow::with_base_url(
            test_config(),
            server.base_url().parse().expect("mock base URL"),
        )
        .expect("build flow");
        let token = flow.exchange_code("CODE123").await.expect("exchange");
        assert_eq!(token.access_token, "TOKEN456");
        mock.assert();
    }

    #[tokio::test]
    async fn rejected_codes_surface_the_error_document() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/oauth2/access_token");
            then.status(400).json_body(serde_json::json!({
                "error_type": "invalid_grant",
                "error_message": "code already used"
            }));
        });

        let flow = OauthFlow::with_base_url(
            test_config(),
            server.base_url().parse().expect("mock base URL"),
        )
        .expect("build flow");
        match flow.exchange_code("STALE").await {
            Err(ApiError::Api { error_type, .. }) => assert_eq!(error_type, "invalid_grant"),
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
