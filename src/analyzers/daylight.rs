use std::path::Path;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::error::{AnalysisError, Result};
use crate::models::HourlyObservation;
use crate::readers::ObservationReader;
use crate::utils::{hhmm_to_time, mean, sample_std_dev};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightTemperature {
    pub mean: f64,
    pub std_dev: f64,
}

/// Mean and sample standard deviation of the dry-bulb temperature between
/// sunrise and sunset on `date`.
///
/// Returns `None` when the dataset has no dry-bulb readings on that day at
/// all. A day whose daylight window turns out empty (sunrise after sunset in
/// anomalous data) yields a NaN pair instead, keeping "day absent" and
/// "window empty" distinguishable.
pub fn get_daylight_temperature(
    date: NaiveDate,
    dataset: &Path,
) -> Result<Option<DaylightTemperature>> {
    let observations = ObservationReader::new().read_observations(dataset)?;

    let day_begin = date.and_time(NaiveTime::MIN);
    let day_end = (date + Days::new(1)).and_time(NaiveTime::MIN);

    let days_rows: Vec<&HourlyObservation> = observations
        .iter()
        .filter(|o| o.timestamp >= day_begin && o.timestamp < day_end && o.has_dry_bulb())
        .collect();

    if days_rows.is_empty() {
        return Ok(None);
    }

    // Sunrise and sunset repeat on every row of the day; the first row
    // carrying both is authoritative.
    let (sunrise_num, sunset_num) = days_rows
        .iter()
        .find_map(|o| match (o.daily_sunrise, o.daily_sunset) {
            (Some(rise), Some(set)) => Some((rise, set)),
            _ => None,
        })
        .ok_or_else(|| {
            AnalysisError::MissingData(format!("no sunrise/sunset values on {date}"))
        })?;

    let sunrise = date.and_time(hhmm_to_time(sunrise_num)?);
    let sunset = date.and_time(hhmm_to_time(sunset_num)?);

    // Inclusive on both ends: readings exactly at sunrise or sunset count.
    let temperatures: Vec<f64> = days_rows
        .iter()
        .filter(|o| o.timestamp >= sunrise && o.timestamp <= sunset)
        .filter_map(|o| o.dry_bulb_temp_f)
        .collect();

    Ok(Some(DaylightTemperature {
        mean: mean(&temperatures),
        std_dev: sample_std_dev(&temperatures),
    }))
}
