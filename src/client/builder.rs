use std::sync::Arc;

use crate::client::core::UserDetailsClient;
use crate::options::{DEFAULT_CONCURRENCY, DEFAULT_USERAGENT};
use crate::transport::HttpTransport;
use crate::{Error, Result};

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct UserDetailsClientBuilder {
    token: Option<String>,
    useragent: Option<String>,
    concurrency: Option<usize>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl UserDetailsClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            useragent: None,
            concurrency: None,
            base_url_override: None,
        }
    }

    /// Set an access token. Unauthenticated requests are allowed but get a
    /// much smaller rate-limit budget.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the `User-Agent` request header. Defaults to `name/version` of
    /// this crate.
    pub fn useragent(mut self, useragent: impl Into<String>) -> Self {
        self.useragent = Some(useragent.into());
        self
    }

    /// Cap concurrent in-flight requests.
    ///
    /// Defaults to 20, env-overridable via `GH_USER_DETAILS_CONCURRENCY`.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Override the base URL.
    ///
    /// This is primarily for testing with mock servers. In production the
    /// default API endpoint is used.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<UserDetailsClient> {
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(Error::validation("`token` must be a non-empty string"));
            }
        }
        let useragent = match self.useragent {
            Some(ua) if ua.trim().is_empty() => {
                return Err(Error::validation("`useragent` must be a non-empty string"));
            }
            Some(ua) => ua,
            None => DEFAULT_USERAGENT.to_string(),
        };

        let concurrency = match self.concurrency {
            Some(0) => return Err(Error::validation("`concurrency` must be positive")),
            Some(n) => n,
            None => std::env::var("GH_USER_DETAILS_CONCURRENCY")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_CONCURRENCY),
        };

        let transport = Arc::new(HttpTransport::new(
            self.token,
            useragent,
            self.base_url_override.as_deref(),
        )?);

        Ok(UserDetailsClient::from_parts(transport, concurrency))
    }
}

impl Default for UserDetailsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
