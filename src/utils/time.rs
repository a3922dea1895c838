use chrono::NaiveTime;

use crate::error::{AnalysisError, Result};

/// Convert an LCD `HHMM` integer (e.g. sunrise 704 -> 07:04) to a time of
/// day. Values with an hour past 23 or a minute past 59 are rejected.
pub fn hhmm_to_time(hhmm: u32) -> Result<NaiveTime> {
    let hour = hhmm / 100;
    let minute = hhmm % 100;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        AnalysisError::InvalidFormat(format!("Invalid HHMM time value: '{hhmm:04}'"))
    })
}
