//! checkin-rs: ergonomic daily check-in client.
//!
//! Automates the daily registration flow of a legacy campus check-in site:
//! a lightweight "one-click" GET on repeat runs, falling back to the full
//! form-based "general" POST when the fast path is refused. Response pages
//! are reduced to a short outcome marker and classified against the fixed
//! marker table for the current day.
//!
//! ```no_run
//! # use checkin_rs::{CheckinClient, SubmitRequest, SubmitUrls, UserInfo};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CheckinClient::default();
//! let request = SubmitRequest {
//!     is_first_exec: false,
//!     userinfo: UserInfo {
//!         name: "张三".into(),
//!         province: "湖北省".into(),
//!         city: "武汉市".into(),
//!         area: "洪山区".into(),
//!     },
//!     id: "20180001".into(),
//!     urls: SubmitUrls {
//!         one_click: "https://example.com/weekly9.asp".parse()?,
//!         general: "https://example.com/weekly.asp".parse()?,
//!     },
//! };
//! checkin_rs::submit(&client, request).await?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod core;
pub mod parse;
pub mod submit;

pub use crate::core::{CheckinClient, CheckinClientBuilder, CheckinError};
pub use classify::OutcomeMap;
pub use parse::{AlertParser, ResponseParser};
pub use submit::{Location, SubmitBuilder, SubmitRequest, SubmitUrls, UserInfo, submit};
