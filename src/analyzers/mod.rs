pub mod daylight;
pub mod similarity;
pub mod wind_chill;

pub use daylight::{get_daylight_temperature, DaylightTemperature};
pub use similarity::get_most_similar_date;
pub use wind_chill::get_sub40f_wind_chill;
