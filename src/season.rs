//! Equinoxes and solstices (Meeus chapter 27).
use chrono::{DateTime, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::delta_t::delta_t_for_year;
use crate::math::{cos_degrees, polynomial, sigma};
use crate::tables::{SEASON_MEAN_TERMS, SEASON_PERIODIC_TERMS};
use crate::time::{datetime_from_julian_day, julian_centuries_from_julian_day};
use crate::types::{CalculationError, Season};

const FIRST_YEAR: i32 = 1000;
const LAST_YEAR: i32 = 3000;

impl Season {
    fn mean_terms(self) -> &'static [f64; 5] {
        match self {
            Season::March => &SEASON_MEAN_TERMS[0],
            Season::June => &SEASON_MEAN_TERMS[1],
            Season::September => &SEASON_MEAN_TERMS[2],
            Season::December => &SEASON_MEAN_TERMS[3],
        }
    }
}

/// Julian ephemeris day (terrestrial time) of `season` in `year`.
///
/// # Errors
///
/// [`CalculationError::YearOutOfRange`] outside 1000..=3000, where the
/// mean-instant polynomials are not valid.
pub fn season_julian_ephemeris_day(year: i32, season: Season) -> Result<f64, CalculationError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalculationError::YearOutOfRange { year });
    }
    let y = f64::from(year - 2000) / 1000.0;
    let jde0 = polynomial(season.mean_terms(), y);
    let t = julian_centuries_from_julian_day(jde0);
    let w = 35999.373 * t - 2.47;
    let delta_lambda = 1.0 + 0.0334 * cos_degrees(w) + 0.0007 * cos_degrees(2.0 * w);
    let s = sigma(&SEASON_PERIODIC_TERMS, |&[a, b, c]| a * cos_degrees(b + c * t));
    Ok(jde0 + 0.00001 * s / delta_lambda)
}

/// UTC instant of an equinox or solstice.
///
/// ```
/// use lunisolar::{season_start, Season};
///
/// let solstice = season_start(2019, Season::December).unwrap();
/// assert_eq!(solstice.format("%Y-%m-%d %H").to_string(), "2019-12-22 04");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(year = year, season = ?season))]
pub fn season_start(year: i32, season: Season) -> Result<DateTime<Utc>, CalculationError> {
    let jde = season_julian_ephemeris_day(year, season)?;
    let julian_day = jde - delta_t_for_year(year) / 86_400.0;
    Ok(datetime_from_julian_day(julian_day)?.and_utc())
}

/// March and September equinoxes of `year`.
pub fn equinoxes(year: i32) -> Result<(DateTime<Utc>, DateTime<Utc>), CalculationError> {
    Ok((season_start(year, Season::March)?, season_start(year, Season::September)?))
}

/// June and December solstices of `year`.
pub fn solstices(year: i32) -> Result<(DateTime<Utc>, DateTime<Utc>), CalculationError> {
    Ok((season_start(year, Season::June)?, season_start(year, Season::December)?))
}
