use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::models::HourlyObservation;

/// Columns every LCD export must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "DATE",
    "HOURLYDRYBULBTEMPF",
    "HOURLYWETBULBTEMPF",
    "HOURLYDewPointTempF",
    "HOURLYAltimeterSetting",
    "HOURLYWindSpeed",
    "DAILYSunrise",
    "DAILYSunset",
];

/// Timestamp layouts seen in LCD exports.
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One CSV row as exported, before any coercion. All fields arrive as text;
/// LCD files flag suspect readings with trailing markers like "32s".
#[derive(Debug, Deserialize)]
struct RawObservationRow {
    #[serde(rename = "DATE")]
    date: Option<String>,
    #[serde(rename = "HOURLYDRYBULBTEMPF")]
    dry_bulb_temp_f: Option<String>,
    #[serde(rename = "HOURLYWETBULBTEMPF")]
    wet_bulb_temp_f: Option<String>,
    #[serde(rename = "HOURLYDewPointTempF")]
    dew_point_f: Option<String>,
    #[serde(rename = "HOURLYAltimeterSetting")]
    altimeter_setting: Option<String>,
    #[serde(rename = "HOURLYWindSpeed")]
    wind_speed: Option<String>,
    #[serde(rename = "DAILYSunrise")]
    daily_sunrise: Option<String>,
    #[serde(rename = "DAILYSunset")]
    daily_sunset: Option<String>,
}

/// Reads hourly observations from an LCD comma-separated export.
///
/// Numeric coercion is lenient: blank or unparseable measurement text becomes
/// `None`. Schema validation is strict: a file without every required column
/// is rejected before any row is parsed.
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    /// Load all observation rows from `path`, dropping rows with a blank
    /// timestamp.
    pub fn read_observations(&self, path: &Path) -> Result<Vec<HourlyObservation>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        Self::validate_headers(reader.headers()?)?;

        let mut observations = Vec::new();
        let mut dropped = 0usize;

        for row_result in reader.deserialize() {
            let raw: RawObservationRow = row_result?;
            match self.parse_row(raw)? {
                Some(obs) => observations.push(obs),
                None => {
                    dropped += 1;
                    debug!("dropped row with blank timestamp");
                }
            }
        }

        info!(
            path = %path.display(),
            rows = observations.len(),
            dropped,
            "loaded observations"
        );
        Ok(observations)
    }

    fn validate_headers(headers: &StringRecord) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(AnalysisError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    fn parse_row(&self, raw: RawObservationRow) -> Result<Option<HourlyObservation>> {
        let date_field = match raw.date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(None),
        };

        let timestamp = parse_timestamp(date_field)?;

        Ok(Some(HourlyObservation {
            timestamp,
            dry_bulb_temp_f: parse_numeric(raw.dry_bulb_temp_f.as_deref()),
            wet_bulb_temp_f: parse_numeric(raw.wet_bulb_temp_f.as_deref()),
            dew_point_f: parse_numeric(raw.dew_point_f.as_deref()),
            altimeter_setting: parse_numeric(raw.altimeter_setting.as_deref()),
            wind_speed: parse_numeric(raw.wind_speed.as_deref()),
            daily_sunrise: parse_hhmm(raw.daily_sunrise.as_deref()),
            daily_sunset: parse_hhmm(raw.daily_sunset.as_deref()),
        }))
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    Err(AnalysisError::InvalidFormat(format!(
        "Unrecognized timestamp: '{value}'"
    )))
}

/// Lenient numeric coercion: blank or malformed text becomes `None`, never an
/// error.
fn parse_numeric(field: Option<&str>) -> Option<f64> {
    field.and_then(|s| s.trim().parse::<f64>().ok())
}

fn parse_hhmm(field: Option<&str>) -> Option<u32> {
    field.and_then(|s| s.trim().parse::<u32>().ok())
}
