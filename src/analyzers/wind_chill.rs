use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::metrics::WindChillUtil;

/// Wind chill on `date` over readings strictly below 40 F, rounded to the
/// nearest integer (half away from zero). Errors from the utility propagate
/// unchanged, including the no-qualifying-readings case.
pub fn get_sub40f_wind_chill(
    date: NaiveDate,
    dataset: &Path,
    util: &dyn WindChillUtil,
) -> Result<i64> {
    let chill = util.wind_chill(&|temperature| temperature < 40.0, date, dataset)?;
    Ok(chill.round() as i64)
}
