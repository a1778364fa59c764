use checkin_rs::{SubmitRequest, SubmitUrls, UserInfo};
use url::Url;

/// Pinned daily stamp so tests stay deterministic across date boundaries.
pub const STAMP: &str = "2026-08-06";

pub fn request(one_click: Url, general: Url, is_first_exec: bool) -> SubmitRequest {
    SubmitRequest {
        is_first_exec,
        userinfo: UserInfo {
            name: "张三".into(),
            province: "A".into(),
            city: "B".into(),
            area: "C".into(),
        },
        id: "123".into(),
        urls: SubmitUrls { one_click, general },
    }
}
