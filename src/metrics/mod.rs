pub mod similarity;
pub mod wind_chill;

pub use similarity::{EuclideanSimilarity, SimilarityIndex};
pub use wind_chill::{NwsWindChill, WindChillUtil};
