use serde::Serialize;

use super::model::Location;

/// Sentinel for the `adds`/`addsxy` location-override fields.
///
/// The server treats a *missing* `adds`/`addsxy` as "location sharing still
/// on"; opting out requires sending the literal string, never omitting the
/// keys.
pub(crate) const NO_LOCATION_SENTINEL: &str = "undefined";

/// Correlation parameters sent as the query string of both requests.
///
/// `id2` is the daily stamp; together with `id` it ties the request to one
/// user and one day.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SharedParams {
    pub(crate) id: String,
    pub(crate) id2: String,
}

/// Query string of the one-click GET.
#[derive(Debug, Serialize)]
pub(crate) struct OneClickQuery<'a> {
    pub(crate) id: &'a str,
    pub(crate) id2: &'a str,
    pub(crate) adds: &'static str,
    pub(crate) addsxy: &'static str,
}

impl<'a> OneClickQuery<'a> {
    pub(crate) fn new(params: &'a SharedParams) -> Self {
        Self {
            id: &params.id,
            id2: &params.id2,
            adds: NO_LOCATION_SENTINEL,
            addsxy: NO_LOCATION_SENTINEL,
        }
    }
}

/// Form-encoded body of the general POST: the location triple, the fixed
/// declarative flags (all "no"), and the location-override sentinels.
#[derive(Debug, Serialize)]
pub(crate) struct GeneralForm<'a> {
    pub(crate) province: &'a str,
    pub(crate) city: &'a str,
    pub(crate) area: &'a str,
    pub(crate) wuhan: &'static str,
    pub(crate) fare: &'static str,
    pub(crate) wls: &'static str,
    pub(crate) kesou: &'static str,
    pub(crate) zhengduan: &'static str,
    #[serde(rename = "Submit")]
    pub(crate) submit: &'static str,
    pub(crate) action: &'static str,
    pub(crate) adds: &'static str,
    pub(crate) addsxy: &'static str,
}

impl<'a> GeneralForm<'a> {
    pub(crate) fn new(location: &'a Location) -> Self {
        Self {
            province: &location.province,
            city: &location.city,
            area: &location.area,
            wuhan: "否",
            fare: "否",
            wls: "否",
            kesou: "否",
            zhengduan: "",
            submit: "提交",
            action: "add",
            adds: NO_LOCATION_SENTINEL,
            addsxy: NO_LOCATION_SENTINEL,
        }
    }
}
