//! Centralized constants for defaults.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Format of the daily stamp sent as `id2` and embedded in the
/// "already registered" marker.
pub(crate) const DATE_STAMP_FORMAT: &str = "%Y-%m-%d";
