use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hourly observation row from an LCD export.
///
/// Measurement fields are optional: blank or unparseable values in the source
/// file become `None` at load time and stay excluded from every aggregate.
/// Sunrise and sunset are raw `HHMM` integers, repeated on every row of the
/// same calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub timestamp: NaiveDateTime,

    pub dry_bulb_temp_f: Option<f64>,
    pub wet_bulb_temp_f: Option<f64>,
    pub dew_point_f: Option<f64>,
    pub altimeter_setting: Option<f64>,
    pub wind_speed: Option<f64>,

    pub daily_sunrise: Option<u32>,
    pub daily_sunset: Option<u32>,
}

impl HourlyObservation {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn has_dry_bulb(&self) -> bool {
        self.dry_bulb_temp_f.is_some()
    }

    pub fn has_sun_times(&self) -> bool {
        self.daily_sunrise.is_some() && self.daily_sunset.is_some()
    }

    pub fn has_any_measurement(&self) -> bool {
        self.dry_bulb_temp_f.is_some()
            || self.wet_bulb_temp_f.is_some()
            || self.dew_point_f.is_some()
            || self.altimeter_setting.is_some()
            || self.wind_speed.is_some()
    }

    /// The five comparison measurements in their fixed column order.
    pub fn measurements(&self) -> [Option<f64>; 5] {
        [
            self.dry_bulb_temp_f,
            self.wet_bulb_temp_f,
            self.dew_point_f,
            self.altimeter_setting,
            self.wind_speed,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(dry_bulb: Option<f64>, wind: Option<f64>) -> HourlyObservation {
        HourlyObservation {
            timestamp: NaiveDate::from_ymd_opt(2017, 6, 9)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            dry_bulb_temp_f: dry_bulb,
            wet_bulb_temp_f: None,
            dew_point_f: None,
            altimeter_setting: None,
            wind_speed: wind,
            daily_sunrise: Some(512),
            daily_sunset: Some(2104),
        }
    }

    #[test]
    fn test_date_extraction() {
        let obs = observation(Some(72.0), None);
        assert_eq!(obs.date(), NaiveDate::from_ymd_opt(2017, 6, 9).unwrap());
    }

    #[test]
    fn test_measurement_presence() {
        let obs = observation(None, Some(8.0));
        assert!(!obs.has_dry_bulb());
        assert!(obs.has_any_measurement());
        assert!(obs.has_sun_times());

        let empty = observation(None, None);
        assert!(!empty.has_any_measurement());
    }

    #[test]
    fn test_measurement_order() {
        let obs = observation(Some(72.0), Some(8.0));
        let values = obs.measurements();
        assert_eq!(values[0], Some(72.0));
        assert_eq!(values[4], Some(8.0));
        assert_eq!(values[1], None);
    }
}
