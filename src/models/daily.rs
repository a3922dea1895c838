use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::HourlyObservation;

/// Daily mean of each comparison measurement, derived from the hourly rows of
/// one calendar day. A column with no readings that day stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub dry_bulb_temp_f: Option<f64>,
    pub wet_bulb_temp_f: Option<f64>,
    pub dew_point_f: Option<f64>,
    pub altimeter_setting: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl DailySummary {
    pub fn has_any_value(&self) -> bool {
        self.comparison_values().iter().any(|v| !v.is_nan())
    }

    /// The five daily means with `None` mapped to NaN, the shape the
    /// similarity metric contract expects.
    pub fn comparison_values(&self) -> [f64; 5] {
        [
            self.dry_bulb_temp_f.unwrap_or(f64::NAN),
            self.wet_bulb_temp_f.unwrap_or(f64::NAN),
            self.dew_point_f.unwrap_or(f64::NAN),
            self.altimeter_setting.unwrap_or(f64::NAN),
            self.wind_speed.unwrap_or(f64::NAN),
        ]
    }
}

/// Collapse hourly observations into one mean-valued summary per calendar
/// day. Days where every comparison column is missing are dropped. The
/// returned map iterates in ascending date order.
pub fn resample_daily(observations: &[HourlyObservation]) -> BTreeMap<NaiveDate, DailySummary> {
    let mut accumulators: BTreeMap<NaiveDate, [(f64, usize); 5]> = BTreeMap::new();

    for obs in observations {
        let sums = accumulators.entry(obs.date()).or_insert([(0.0, 0); 5]);
        for (slot, value) in sums.iter_mut().zip(obs.measurements()) {
            if let Some(v) = value {
                slot.0 += v;
                slot.1 += 1;
            }
        }
    }

    accumulators
        .into_iter()
        .filter_map(|(date, sums)| {
            let mean = |(sum, count): (f64, usize)| {
                if count > 0 {
                    Some(sum / count as f64)
                } else {
                    None
                }
            };
            let summary = DailySummary {
                date,
                dry_bulb_temp_f: mean(sums[0]),
                wet_bulb_temp_f: mean(sums[1]),
                dew_point_f: mean(sums[2]),
                altimeter_setting: mean(sums[3]),
                wind_speed: mean(sums[4]),
            };
            if summary.has_any_value() {
                Some((date, summary))
            } else {
                None
            }
        })
        .collect()
}
