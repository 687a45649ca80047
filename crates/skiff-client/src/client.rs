//! Shared HTTP plumbing: authentication context, configuration, and the
//! request/decode helpers every endpoint wrapper builds on.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use url::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use skiff_models::ApiErrorBody;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Production API root. Endpoint paths are joined onto this, so a custom
/// base URL must keep the trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://api.put.io/v2/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth bearer credential presented on every authenticated request.
///
/// A plain value passed to [`ApiClient::new`]; acquisition, refresh, and
/// storage are the caller's concern.
#[derive(Clone)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    /// Wrap an access token obtained through the OAuth flow.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn header_value(&self) -> ApiResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ApiError::invalid_request("access token contains invalid characters"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthContext")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Connection settings for an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; defaults to the production endpoint.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Authenticated put.io API client.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the production API.
    pub fn new(auth: &AuthContext) -> ApiResult<Self> {
        Self::with_config(auth, ClientConfig::default())
    }

    /// Build a client with explicit connection settings.
    pub fn with_config(auth: &AuthContext, config: ClientConfig) -> ApiResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth.header_value()?);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|source| ApiError::Transport { source })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::invalid_request(format!("bad endpoint path '{path}': {err}")))
    }

    /// GET `path` and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        read_json(response).await
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        read_json(response).await
    }

    /// POST a form-encoded `body` to `path`, discarding the response body.
    pub(crate) async fn post_form<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .form(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        expect_success(response).await
    }

    /// POST with no body to `path`, discarding the response body.
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        expect_success(response).await
    }
}

/// Decode a response body, classifying non-success statuses first.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ApiError::Transport { source })?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { source })
}

async fn expect_success(response: Response) -> ApiResult<()> {
    check_status(response).await.map(|_| ())
}

/// Turn a non-success response into an [`ApiError::Api`] carrying whatever
/// the server's error document provides.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await.unwrap_or_default();
    let body = serde_json::from_slice::<ApiErrorBody>(&bytes).unwrap_or_default();
    let error_type = body
        .error_type
        .unwrap_or_else(|| "UnknownError".to_string());
    let message = body.error_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    warn!(
        status = status.as_u16(),
        error_type = %error_type,
        "server rejected request"
    );
    Err(ApiError::Api {
        status_code: status.as_u16(),
        error_type,
        message,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;

    /// Client pointed at a mock server, authenticated with a fixed token.
    pub(crate) fn test_client(server: &MockServer) -> ApiClient {
        let config = ClientConfig {
            base_url: server.base_url().parse().expect("mock base URL"),
            ..ClientConfig::default()
        };
        ApiClient::with_config(&AuthContext::new("TESTTOKEN"), config).expect("build client")
    }

    #[tokio::test]
    async fn bearer_token_is_sent_on_every_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/account/info")
                .header("authorization", "Bearer TESTTOKEN");
            then.status(200)
                .json_body(serde_json::json!({"info": {"username": "quux"}}));
        });

        let client = test_client(&server);
        let info = client.account_info().await.expect("account info");
        assert_eq!(info.username, "quux");
        mock.assert();
    }

    #[tokio::test]
    async fn error_documents_become_typed_api_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/transfers/7");
            then.status(401).json_body(serde_json::json!({
                "status": "ERROR",
                "status_code": 401,
                "error_type": "invalid_grant",
                "error_message": "token expired"
            }));
        });

        let client = test_client(&server);
        match client.transfer(7).await {
            Err(ApiError::Api {
                status_code,
                error_type,
                message,
            }) => {
                assert_eq!(status_code, 401);
                assert_eq!(error_type, "invalid_grant");
                assert_eq!(message, "token expired");
            }
            other => panic!("expected typed api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bodyless_errors_fall_back_to_the_status_reason() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/transfers/8");
            then.status(503);
        });

        let client = test_client(&server);
        match client.transfer(8).await {
            Err(ApiError::Api {
                status_code,
                error_type,
                ..
            }) => {
                assert_eq!(status_code, 503);
                assert_eq!(error_type, "UnknownError");
            }
            other => panic!("expected typed api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_bodies_surface_as_decode_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/transfers/list");
            then.status(200).body("not json");
        });

        let client = test_client(&server);
        assert!(matches!(
            client.list_transfers().await,
            Err(ApiError::Decode { .. })
        ));
    }

    #[test]
    fn auth_context_debug_redacts_the_token() {
        let auth = AuthContext::new("SECRET");
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("<redacted>"));
    }
}
