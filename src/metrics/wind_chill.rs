use std::path::Path;

use chrono::NaiveDate;

use crate::error::{AnalysisError, Result};
use crate::readers::ObservationReader;

/// Wind-chill computation over a dataset, restricted to readings on `date`
/// whose dry-bulb temperature satisfies `predicate`. Fails when no reading
/// qualifies.
pub trait WindChillUtil {
    fn wind_chill(
        &self,
        predicate: &dyn Fn(f64) -> bool,
        date: NaiveDate,
        dataset: &Path,
    ) -> Result<f64>;
}

impl<F> WindChillUtil for F
where
    F: Fn(&dyn Fn(f64) -> bool, NaiveDate, &Path) -> Result<f64>,
{
    fn wind_chill(
        &self,
        predicate: &dyn Fn(f64) -> bool,
        date: NaiveDate,
        dataset: &Path,
    ) -> Result<f64> {
        self(predicate, date, dataset)
    }
}

/// Reference implementation using the NWS wind-chill index.
///
/// Each qualifying reading needs both a dry-bulb temperature and a wind
/// speed; the reported value is the mean index across those readings. At calm
/// wind (3 mph or less) the index is undefined and the air temperature is
/// used instead.
pub struct NwsWindChill;

impl NwsWindChill {
    pub fn new() -> Self {
        Self
    }

    fn index(temperature_f: f64, wind_mph: f64) -> f64 {
        if wind_mph <= 3.0 {
            return temperature_f;
        }
        let v = wind_mph.powf(0.16);
        35.74 + 0.6215 * temperature_f - 35.75 * v + 0.4275 * temperature_f * v
    }
}

impl Default for NwsWindChill {
    fn default() -> Self {
        Self::new()
    }
}

impl WindChillUtil for NwsWindChill {
    fn wind_chill(
        &self,
        predicate: &dyn Fn(f64) -> bool,
        date: NaiveDate,
        dataset: &Path,
    ) -> Result<f64> {
        let observations = ObservationReader::new().read_observations(dataset)?;

        let values: Vec<f64> = observations
            .iter()
            .filter(|o| o.date() == date)
            .filter_map(|o| match (o.dry_bulb_temp_f, o.wind_speed) {
                (Some(t), Some(v)) if predicate(t) => Some(Self::index(t, v)),
                _ => None,
            })
            .collect();

        if values.is_empty() {
            return Err(AnalysisError::NoQualifyingReadings { date });
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }
}
