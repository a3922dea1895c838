pub mod stats;
pub mod time;

pub use stats::{mean, sample_std_dev};
pub use time::hhmm_to_time;
