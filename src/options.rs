//! Query options and validation.

use crate::{Error, Result};

/// Default cap on concurrent in-flight requests. Heuristic.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USERAGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Options for a batch user-details query.
///
/// `token` and `useragent` are passed through opaquely to every request;
/// `concurrency` caps the number of in-flight requests (effective value is
/// clamped to the number of usernames).
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub usernames: Vec<String>,
    pub token: Option<String>,
    pub useragent: Option<String>,
    pub concurrency: Option<usize>,
}

impl FetchOptions {
    pub fn new(usernames: Vec<String>) -> Self {
        Self {
            usernames,
            token: None,
            useragent: None,
            concurrency: None,
        }
    }

    /// Set an access token for authenticated requests.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the `User-Agent` request header.
    pub fn useragent(mut self, useragent: impl Into<String>) -> Self {
        self.useragent = Some(useragent.into());
        self
    }

    /// Cap concurrent in-flight requests.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_usernames(&self.usernames)?;
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(Error::validation("`token` option must be a non-empty string"));
            }
        }
        if let Some(useragent) = &self.useragent {
            if useragent.trim().is_empty() {
                return Err(Error::validation(
                    "`useragent` option must be a non-empty string",
                ));
            }
        }
        if self.concurrency == Some(0) {
            return Err(Error::validation("`concurrency` option must be positive"));
        }
        Ok(())
    }
}

/// An empty list is allowed (the batch completes immediately), but every
/// entry must be a usable username.
pub(crate) fn validate_usernames(usernames: &[String]) -> Result<()> {
    for username in usernames {
        if username.trim().is_empty() {
            return Err(Error::validation(
                "`usernames` option must contain only non-empty strings",
            ));
        }
    }
    Ok(())
}
