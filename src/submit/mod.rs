mod api;
mod model;
mod wire;

pub use model::{Location, SubmitRequest, SubmitUrls, UserInfo};

use std::sync::Arc;

use crate::core::client::constants::DATE_STAMP_FORMAT;
use crate::core::{CheckinClient, CheckinError};
use crate::parse::{AlertParser, ResponseParser};

/// Submits the daily check-in with default settings.
///
/// Tries the one-click fast path on repeat runs and falls back to the
/// general form when the fast path is refused; first runs go straight to
/// the form.
///
/// # Errors
///
/// Returns `CheckinError` if a request fails, a response cannot be
/// classified, or the general submission is rejected.
pub async fn submit(client: &CheckinClient, request: SubmitRequest) -> Result<(), CheckinError> {
    SubmitBuilder::new(client, request).submit().await
}

/// A builder for one daily check-in run.
///
/// # Example
///
/// ```no_run
/// # use checkin_rs::{CheckinClient, SubmitBuilder, SubmitRequest, SubmitUrls, UserInfo};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CheckinClient::default();
/// let request = SubmitRequest {
///     is_first_exec: false,
///     userinfo: UserInfo {
///         name: "张三".into(),
///         province: "湖北省".into(),
///         city: "武汉市".into(),
///         area: "洪山区".into(),
///     },
///     id: "20180001".into(),
///     urls: SubmitUrls {
///         one_click: "https://example.com/weekly9.asp".parse()?,
///         general: "https://example.com/weekly.asp".parse()?,
///     },
/// };
/// SubmitBuilder::new(&client, request).submit().await?;
/// # Ok(())
/// # }
/// ```
pub struct SubmitBuilder {
    client: CheckinClient,
    request: SubmitRequest,
    date_stamp: Option<String>,
    parser: Arc<dyn ResponseParser>,
}

impl SubmitBuilder {
    /// Creates a new `SubmitBuilder` for a given request.
    pub fn new(client: &CheckinClient, request: SubmitRequest) -> Self {
        Self {
            client: client.clone(),
            request,
            date_stamp: None,
            parser: Arc::new(AlertParser),
        }
    }

    /// Overrides the daily stamp (default: today in the local timezone).
    ///
    /// The stamp is both the `id2` correlation parameter and part of the
    /// "already registered" marker, so pinning it makes a run deterministic
    /// across date boundaries.
    #[must_use]
    pub fn date_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.date_stamp = Some(stamp.into());
        self
    }

    /// Swaps the marker-extraction collaborator.
    #[must_use]
    pub fn parser(mut self, parser: impl ResponseParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Runs the submission.
    ///
    /// # Errors
    ///
    /// Returns `CheckinError` if a request fails, a response cannot be
    /// classified, or the general submission is rejected.
    #[tracing::instrument(skip(self), err, fields(id = %self.request.id))]
    pub async fn submit(self) -> Result<(), CheckinError> {
        let stamp = self.date_stamp.unwrap_or_else(today_stamp);
        api::submit_request(&self.client, &self.request, &stamp, self.parser.as_ref()).await
    }
}

fn today_stamp() -> String {
    chrono::Local::now().format(DATE_STAMP_FORMAT).to_string()
}
