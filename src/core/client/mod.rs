//! Public client surface + builder.
//! Endpoint URLs are per-request input (see [`crate::submit::SubmitUrls`]);
//! the client only owns the HTTP stack.

pub(crate) mod constants;

use crate::core::error::CheckinError;
use constants::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// The HTTP client used for all check-in requests.
///
/// Cheap to clone; wraps a shared [`reqwest::Client`] with a cookie store so
/// the one-click and general requests of a single run share a session.
#[derive(Debug, Clone)]
pub struct CheckinClient {
    http: Client,
}

impl Default for CheckinClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl CheckinClient {
    /// Create a new builder.
    pub fn builder() -> CheckinClientBuilder {
        CheckinClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct CheckinClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CheckinClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `CheckinError::Http` if the underlying `reqwest` client cannot
    /// be constructed.
    pub fn build(self) -> Result<CheckinClient, CheckinError> {
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(CheckinClient { http })
    }
}
