use serde::Deserialize;
use url::Url;

/// The user a check-in is submitted for.
///
/// Derives `Deserialize` so callers can load it from their own config
/// source.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// Display name, only used for logging.
    pub name: String,
    /// Province the user registered with.
    pub province: String,
    /// City the user registered with.
    pub city: String,
    /// District/area the user registered with.
    pub area: String,
}

/// The location triple re-asserted by the general (form-based) submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub province: String,
    pub city: String,
    pub area: String,
}

impl From<&UserInfo> for Location {
    fn from(userinfo: &UserInfo) -> Self {
        Self {
            province: userinfo.province.clone(),
            city: userinfo.city.clone(),
            area: userinfo.area.clone(),
        }
    }
}

/// The endpoint pair a submission runs against.
#[derive(Debug, Clone)]
pub struct SubmitUrls {
    /// Target of the lightweight GET check-in.
    pub one_click: Url,
    /// Target of the form-based POST check-in.
    pub general: Url,
}

/// Aggregate input for one submission run.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Whether this is the first execution today. The fast path is skipped
    /// on first runs; the server only accepts one-click after a general
    /// registration exists for the day.
    pub is_first_exec: bool,
    /// The user being checked in.
    pub userinfo: UserInfo,
    /// Account identifier sent with every request.
    pub id: String,
    /// The one-click/general endpoint pair.
    pub urls: SubmitUrls,
}
