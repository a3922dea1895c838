pub mod daily;
pub mod observation;

pub use daily::{resample_daily, DailySummary};
pub use observation::HourlyObservation;
