use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::metrics::SimilarityIndex;
use crate::models::resample_daily;
use crate::readers::ObservationReader;

/// The shared calendar day on which two datasets were most alike under
/// `metric`, formatted `MM/DD/YY`. Days present in only one dataset are
/// excluded; `None` when the datasets share no days at all.
pub fn get_most_similar_date(
    dataset_a: &Path,
    dataset_b: &Path,
    metric: &dyn SimilarityIndex,
) -> Result<Option<String>> {
    let reader = ObservationReader::new();
    let daily_a = resample_daily(&reader.read_observations(dataset_a)?);
    let daily_b = resample_daily(&reader.read_observations(dataset_b)?);

    let mut best: Option<(NaiveDate, f64)> = None;

    for (date, summary_a) in &daily_a {
        let Some(summary_b) = daily_b.get(date) else {
            continue;
        };

        let similarity = metric.similarity_index(summary_a, summary_b);

        // `<=` so an exact tie moves the winner forward; iteration is
        // ascending, hence the chronologically latest tied day is kept.
        let replace = match best {
            None => true,
            Some((_, best_value)) => similarity <= best_value,
        };
        if replace {
            best = Some((*date, similarity));
        }
    }

    Ok(best.map(|(date, _)| date.format("%m/%d/%y").to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::EuclideanSimilarity;
    use crate::models::DailySummary;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "DATE,HOURLYDRYBULBTEMPF,HOURLYWETBULBTEMPF,HOURLYDewPointTempF,HOURLYAltimeterSetting,HOURLYWindSpeed,DAILYSunrise,DAILYSunset";

    fn write_fixture(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_no_shared_days_is_absent() {
        let a = write_fixture(&["2017-01-01 01:00,30,28,25,29.9,10,712,1704"]);
        let b = write_fixture(&["2017-02-01 01:00,30,28,25,29.9,10,700,1730"]);

        let result = get_most_similar_date(a.path(), b.path(), &EuclideanSimilarity::new());
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_most_similar_shared_day() {
        let a = write_fixture(&[
            "2017-01-01 01:00,30,28,25,29.9,10,712,1704",
            "2017-01-02 01:00,50,45,40,30.1,5,712,1704",
        ]);
        let b = write_fixture(&[
            "2017-01-01 01:00,80,70,60,28.0,30,700,1730",
            "2017-01-02 01:00,51,45,40,30.1,5,700,1730",
        ]);

        let result = get_most_similar_date(a.path(), b.path(), &EuclideanSimilarity::new());
        assert_eq!(result.unwrap(), Some("01/02/17".to_string()));
    }

    #[test]
    fn test_unmatched_extra_day_ignored() {
        let a = write_fixture(&[
            "2017-01-01 01:00,30,28,25,29.9,10,712,1704",
            // Perfectly matching values, but the day exists only in A.
            "2017-01-03 01:00,60,55,50,30.0,8,712,1704",
        ]);
        let b = write_fixture(&["2017-01-01 01:00,32,28,25,29.9,10,700,1730"]);

        let result = get_most_similar_date(a.path(), b.path(), &EuclideanSimilarity::new());
        assert_eq!(result.unwrap(), Some("01/01/17".to_string()));
    }

    #[test]
    fn test_exact_tie_keeps_later_day() {
        let a = write_fixture(&[
            "2017-01-01 01:00,30,28,25,29.9,10,712,1704",
            "2017-01-02 01:00,30,28,25,29.9,10,712,1704",
        ]);
        let b = write_fixture(&[
            "2017-01-01 01:00,30,28,25,29.9,10,700,1730",
            "2017-01-02 01:00,30,28,25,29.9,10,700,1730",
        ]);

        // Both days compare identically; the later iterated day wins.
        let result = get_most_similar_date(a.path(), b.path(), &EuclideanSimilarity::new());
        assert_eq!(result.unwrap(), Some("01/02/17".to_string()));
    }

    #[test]
    fn test_closure_metric() {
        let a = write_fixture(&[
            "2017-01-01 01:00,30,28,25,29.9,10,712,1704",
            "2017-01-02 01:00,50,45,40,30.1,5,712,1704",
        ]);
        let b = write_fixture(&[
            "2017-01-01 01:00,35,28,25,29.9,10,700,1730",
            "2017-01-02 01:00,90,45,40,30.1,5,700,1730",
        ]);

        let dry_bulb_gap = |day_a: &DailySummary, day_b: &DailySummary| {
            (day_a.comparison_values()[0] - day_b.comparison_values()[0]).abs()
        };

        let result = get_most_similar_date(a.path(), b.path(), &dry_bulb_gap);
        assert_eq!(result.unwrap(), Some("01/01/17".to_string()));
    }

    #[test]
    fn test_hourly_values_averaged_before_comparison() {
        // Day means: A = 30, B = 30, although no single hour matches.
        let a = write_fixture(&[
            "2017-01-01 01:00,20,,,,,712,1704",
            "2017-01-01 02:00,40,,,,,712,1704",
        ]);
        let b = write_fixture(&[
            "2017-01-01 01:00,25,,,,,700,1730",
            "2017-01-01 02:00,35,,,,,700,1730",
        ]);

        let dry_bulb_gap = |day_a: &DailySummary, day_b: &DailySummary| {
            (day_a.comparison_values()[0] - day_b.comparison_values()[0]).abs()
        };

        let result = get_most_similar_date(a.path(), b.path(), &dry_bulb_gap);
        assert_eq!(result.unwrap(), Some("01/01/17".to_string()));
    }
}
