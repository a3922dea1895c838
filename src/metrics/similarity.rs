use crate::models::DailySummary;

/// Scalar comparison of two days' mean conditions. Lower means more similar.
/// Implementations must handle NaN inputs deterministically; daily means of
/// columns with no readings arrive as NaN.
pub trait SimilarityIndex {
    fn similarity_index(&self, day_a: &DailySummary, day_b: &DailySummary) -> f64;
}

impl<F> SimilarityIndex for F
where
    F: Fn(&DailySummary, &DailySummary) -> f64,
{
    fn similarity_index(&self, day_a: &DailySummary, day_b: &DailySummary) -> f64 {
        self(day_a, day_b)
    }
}

/// Reference metric: Euclidean distance across the five measurement pairs.
/// Pairs with NaN on either side are skipped; if no pair is comparable the
/// index is NaN, which never displaces an existing best candidate.
pub struct EuclideanSimilarity;

impl EuclideanSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EuclideanSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityIndex for EuclideanSimilarity {
    fn similarity_index(&self, day_a: &DailySummary, day_b: &DailySummary) -> f64 {
        let mut sum_sq = 0.0;
        let mut compared = 0usize;

        for (a, b) in day_a
            .comparison_values()
            .into_iter()
            .zip(day_b.comparison_values())
        {
            if a.is_nan() || b.is_nan() {
                continue;
            }
            sum_sq += (a - b).powi(2);
            compared += 1;
        }

        if compared == 0 {
            return f64::NAN;
        }
        sum_sq.sqrt()
    }
}
