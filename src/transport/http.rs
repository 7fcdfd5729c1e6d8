use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::debug;

use crate::batch::FetchOutcome;
use crate::ratelimit::RateLimit;
use crate::{Error, Result};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    useragent: String,
}

impl HttpTransport {
    pub fn new(
        token: Option<String>,
        useragent: String,
        base_url_override: Option<&str>,
    ) -> Result<Self> {
        let base_url = base_url_override.unwrap_or(DEFAULT_BASE_URL);
        url::Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("invalid base URL `{}`: {}", base_url, e)))?;

        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("GH_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(
                env::var("GH_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            useragent,
        })
    }

    /// Fetch details for a single username.
    ///
    /// Any response carrying rate-limit headers is a per-username outcome:
    /// 2xx resolves to [`FetchOutcome::Success`] with the JSON payload, other
    /// statuses to [`FetchOutcome::Failure`] with a human-readable message.
    /// A connection failure, a body that is not JSON, or a response without
    /// rate-limit headers is an `Err` and aborts the batch.
    pub async fn fetch_user(&self, username: &str) -> Result<FetchOutcome> {
        let url = format!("{}/users/{}", self.base_url, username);

        let mut req = self
            .client
            .get(&url)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(USER_AGENT, &self.useragent);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("token {}", token));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = resp.status();
        let Some(rate_limit) = rate_limit_from_headers(resp.headers()) else {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                message: if body.is_empty() {
                    "response missing rate limit headers".to_string()
                } else {
                    body
                },
            });
        };

        if status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| Error::Transport(TransportError::Http(e)))?;
            let details: serde_json::Value = serde_json::from_str(&body)?;
            return Ok(FetchOutcome::Success {
                details,
                rate_limit,
            });
        }

        debug!(
            username,
            http_status = status.as_u16(),
            "user details request failed"
        );
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Ok(FetchOutcome::Failure {
            message,
            rate_limit,
        })
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// Parse the rate-limit response headers. `None` when any is missing or
/// unparsable, which the caller treats as a fatal response.
fn rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimit> {
    Some(RateLimit {
        limit: header_u64(headers, "x-ratelimit-limit")?,
        remaining: header_u64(headers, "x-ratelimit-remaining")?,
        reset: header_u64(headers, "x-ratelimit-reset")?,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(limit: &str, remaining: &str, reset: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert("x-ratelimit-limit", HeaderValue::from_str(limit).unwrap());
        map.insert(
            "x-ratelimit-remaining",
            HeaderValue::from_str(remaining).unwrap(),
        );
        map.insert("x-ratelimit-reset", HeaderValue::from_str(reset).unwrap());
        map
    }

    #[test]
    fn parses_rate_limit_headers() {
        let parsed = rate_limit_from_headers(&headers("5000", "4999", "1468016793")).unwrap();
        assert_eq!(
            parsed,
            RateLimit {
                limit: 5000,
                remaining: 4999,
                reset: 1_468_016_793,
            }
        );
    }

    #[test]
    fn missing_or_malformed_headers_yield_none() {
        assert!(rate_limit_from_headers(&HeaderMap::new()).is_none());
        assert!(rate_limit_from_headers(&headers("5000", "not-a-number", "1468016793")).is_none());

        let mut partial = HeaderMap::new();
        partial.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
        assert!(rate_limit_from_headers(&partial).is_none());
    }

    #[test]
    fn rejects_an_invalid_base_url() {
        let err = HttpTransport::new(None, "test-agent".to_string(), Some("not a url"));
        assert!(matches!(err, Err(Error::Configuration(_))));
    }
}
