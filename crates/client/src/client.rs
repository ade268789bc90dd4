//! HTTP plumbing shared by every Vultr service.
//!
//! [`VultrClient`] owns a configured [`reqwest::Client`] plus the base URL
//! and bearer token. Service modules (e.g. [`startup_scripts`](crate::startup_scripts))
//! build on the `get_json` helper here.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("vultr-provider/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Vultr v2 API.
#[derive(Debug, Clone)]
pub struct VultrClient {
    client: reqwest::Client,
    config: ClientConfig,
}

/// Shape of Vultr's JSON error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl VultrClient {
    /// Build a client from `config`, applying its request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve `segments` against the base URL. Each segment is
    /// percent-encoded, so an ID can never add path components.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.config.api_url).map_err(|e| {
            ApiError::InvalidConfig(format!("invalid API URL `{}`: {e}", self.config.api_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidConfig(format!(
                    "API URL `{}` cannot be a base",
                    self.config.api_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// `GET` the endpoint at `segments` with optional query parameters,
    /// decoding the JSON body into `T`.
    pub(crate) async fn get_json<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.client.get(url).bearer_auth(&self.config.api_key);

        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise turn the
    /// body into an [`ApiError::Status`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Extract the `error` field from a Vultr error body, falling back to the
/// raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => body.trim().to_string(),
    }
}
