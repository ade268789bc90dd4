use std::fmt;
use std::time::Duration;

use crate::error::ApiError;

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.vultr.com";

/// Default page size for list endpoints. Vultr caps `per_page` at 500.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 500;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Vultr client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Personal access token sent as a bearer token.
    pub api_key: String,
    /// Base URL without trailing slash (default: `https://api.vultr.com`).
    pub api_url: String,
    /// Page size for list calls (default: `100`).
    pub per_page: u32,
    /// Per-request timeout (default: `30s`).
    pub request_timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("per_page", &self.per_page)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page size, clamped to `1..=MAX_PER_PAGE`.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `VULTR_API_KEY`              | required                |
    /// | `VULTR_API_URL`              | `https://api.vultr.com` |
    /// | `VULTR_PER_PAGE`             | `100`                   |
    /// | `VULTR_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`, so callers and tests can supply their own source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("VULTR_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidConfig("VULTR_API_KEY is required".into()))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup("VULTR_API_URL") {
            config = config.with_api_url(url);
        }

        if let Some(raw) = lookup("VULTR_PER_PAGE") {
            let per_page: u32 = raw.parse().map_err(|_| {
                ApiError::InvalidConfig(format!("VULTR_PER_PAGE must be a positive integer, got `{raw}`"))
            })?;
            config = config.with_per_page(per_page);
        }

        if let Some(raw) = lookup("VULTR_REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ApiError::InvalidConfig(format!(
                        "VULTR_REQUEST_TIMEOUT_SECS must be a positive integer, got `{raw}`"
                    ))
                })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[("VULTR_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_key_is_rejected() {
        assert_matches!(ClientConfig::from_lookup(lookup(&[])), Err(ApiError::InvalidConfig(_)));
        assert_matches!(
            ClientConfig::from_lookup(lookup(&[("VULTR_API_KEY", "  ")])),
            Err(ApiError::InvalidConfig(_))
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("VULTR_API_KEY", "k"),
            ("VULTR_API_URL", "http://localhost:8080/"),
            ("VULTR_PER_PAGE", "25"),
            ("VULTR_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.per_page, 25);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_per_page_is_rejected() {
        let result = ClientConfig::from_lookup(lookup(&[("VULTR_API_KEY", "k"), ("VULTR_PER_PAGE", "lots")]));
        assert_matches!(result, Err(ApiError::InvalidConfig(msg)) if msg.contains("VULTR_PER_PAGE"));
    }

    #[test]
    fn zero_or_invalid_timeout_is_rejected() {
        for raw in ["0", "-5", "soon"] {
            let result = ClientConfig::from_lookup(lookup(&[
                ("VULTR_API_KEY", "k"),
                ("VULTR_REQUEST_TIMEOUT_SECS", raw),
            ]));
            assert_matches!(
                result,
                Err(ApiError::InvalidConfig(msg)) if msg.contains("VULTR_REQUEST_TIMEOUT_SECS")
            );
        }
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn per_page_is_clamped() {
        assert_eq!(ClientConfig::new("k").with_per_page(0).per_page, 1);
        assert_eq!(ClientConfig::new("k").with_per_page(10_000).per_page, MAX_PER_PAGE);
    }
}
