//! Maps the short outcome markers returned by the check-in endpoints to a
//! success/failure boolean.

use crate::core::CheckinError;
use std::collections::HashMap;

/// Marker returned when a registration attempt is refused.
pub(crate) const FAILED_MARKER: &str = "登记失败";
/// Marker returned when a submission is accepted.
pub(crate) const SUBMITTED_MARKER: &str = "提交成功";
/// Suffix of the marker returned when today's registration already exists;
/// the full marker is prefixed with the daily stamp.
pub(crate) const ALREADY_REGISTERED_SUFFIX: &str = "登记已存在";

/// The fixed marker → outcome table for one daily stamp.
///
/// Built as a plain value at the start of each submission run; the
/// "already registered" entry embeds the stamp, so a map is only valid for
/// the day it was built for.
#[derive(Debug, Clone)]
pub struct OutcomeMap {
    map: HashMap<String, bool>,
}

impl OutcomeMap {
    /// Build the outcome table for the given daily stamp.
    pub fn for_stamp(stamp: &str) -> Self {
        let map = HashMap::from([
            (FAILED_MARKER.to_string(), false),
            (SUBMITTED_MARKER.to_string(), true),
            (format!("{stamp}{ALREADY_REGISTERED_SUFFIX}"), true),
        ]);
        Self { map }
    }

    /// Classify an extracted marker.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::UnrecognizedResponse`] when the marker is not
    /// in the table.
    pub fn classify(&self, marker: &str) -> Result<bool, CheckinError> {
        self.map
            .get(marker)
            .copied()
            .ok_or_else(|| CheckinError::UnrecognizedResponse(marker.to_string()))
    }
}
