//! Sunrise, sunset, twilight and solar noon.
//!
//! The NOAA algorithm: an approximate solar noon seeds a first estimate of
//! the event, which is refined exactly once more. There is no loop to
//! convergence; two passes are the published method.
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::earth::adjusted_solar_elevation;
use crate::geo::Location;
use crate::math::{arccos_degrees, cos_degrees, tan_degrees};
use crate::solar::{equation_of_time, solar_declination};
use crate::time::{
    hours_from_minutes, julian_centuries_from_julian_day, julian_day_from_date, moment_from_date, utc_from_moment,
};
use crate::types::{CalculationError, SolarElevation, SolarEventResult, SunEvent};
use crate::zone::TimeZoneResolver;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Options for the rise/set solvers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunriseOptions {
    /// Zenith angle the Sun must cross. Defaults to the geometric horizon.
    pub solar_elevation: SolarElevation,
}

impl SunriseOptions {
    pub fn with_solar_elevation(solar_elevation: SolarElevation) -> Self {
        Self { solar_elevation }
    }
}

/// Hour angle at which the Sun reaches `zenith`, in degrees.
///
/// Positive for sunrise, negative for sunset. When the cosine falls outside
/// [-1, 1] the Sun never reaches the zenith angle that day.
fn hour_angle(latitude: f64, declination: f64, zenith: f64, event: SunEvent) -> SolarEventResult<f64> {
    let cos_h = cos_degrees(zenith) / (cos_degrees(latitude) * cos_degrees(declination))
        - tan_degrees(latitude) * tan_degrees(declination);
    if cos_h > 1.0 {
        tracing::debug!(cos_h, latitude, declination, "sun stays below target elevation");
        return SolarEventResult::AllNight;
    }
    if cos_h < -1.0 {
        tracing::debug!(cos_h, latitude, declination, "sun stays above target elevation");
        return SolarEventResult::AllDay;
    }
    let h = arccos_degrees(cos_h);
    SolarEventResult::Occurs(match event {
        SunEvent::Rise => h,
        SunEvent::Set => -h,
    })
}

/// One NOAA pass: the event time in minutes after 0h UT, with the Sun's
/// declination and the equation of time evaluated at centuries `t`.
fn event_pass(t: f64, latitude: f64, longitude_west: f64, zenith: f64, event: SunEvent) -> SolarEventResult<f64> {
    let eq_time = equation_of_time(t);
    let declination = solar_declination(t);
    hour_angle(latitude, declination, zenith, event).map(|h| 720.0 + 4.0 * (longitude_west - h) - eq_time)
}

/// Minutes after 0h UT on `julian_day` at which the Sun crosses `zenith`.
///
/// `julian_day` must fall on 0h UT. The result may be negative or exceed a
/// day when the local event falls on the neighbouring UT date.
///
/// # Errors
///
/// [`CalculationError::LatitudeOutOfRange`] or
/// [`CalculationError::LongitudeOutOfRange`] for coordinates a [`Location`]
/// would reject.
pub fn sun_event_minutes(
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SunEvent,
) -> Result<SolarEventResult<f64>, CalculationError> {
    Location::new(longitude, latitude, 0.0)?;
    Ok(event_minutes(julian_day, latitude, longitude, zenith, event))
}

fn event_minutes(
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SunEvent,
) -> SolarEventResult<f64> {
    let longitude_west = -longitude;
    let t = julian_centuries_from_julian_day(julian_day);
    let noon = 720.0 + 4.0 * longitude_west - equation_of_time(t);
    let t_noon = julian_centuries_from_julian_day(julian_day + noon / MINUTES_PER_DAY);

    let first = match event_pass(t_noon, latitude, longitude_west, zenith, event) {
        SolarEventResult::Occurs(minutes) => minutes,
        other => return other,
    };
    let t_first = julian_centuries_from_julian_day(julian_day + first / MINUTES_PER_DAY);
    event_pass(t_first, latitude, longitude_west, zenith, event)
}

/// Hour of day (UT, [0, 24)) at which the Sun crosses `zenith`.
///
/// `zenith` is the target after any horizon adjustment; see
/// [`crate::earth::adjusted_solar_elevation`].
pub fn sun_event_hours(
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SunEvent,
) -> Result<SolarEventResult<f64>, CalculationError> {
    Ok(sun_event_minutes(julian_day, latitude, longitude, zenith, event)?.map(hours_from_minutes))
}

fn zenith_for(location: &Location, options: &SunriseOptions) -> Result<f64, CalculationError> {
    let target = options.solar_elevation.validate()?;
    Ok(adjusted_solar_elevation(target, location.elevation()))
}

fn utc_event(
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
    event: SunEvent,
) -> Result<SolarEventResult, CalculationError> {
    let zenith = zenith_for(location, options)?;
    let julian_day = julian_day_from_date(date);
    event_minutes(julian_day, location.latitude(), location.longitude(), zenith, event)
        .try_map(|minutes| utc_from_moment(moment_from_date(date) + minutes / MINUTES_PER_DAY))
}

/// Sunrise on the UT date `date`, as a UTC instant.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunisolar::{utc_sunrise, Location, SunriseOptions};
///
/// let sydney = Location::new(151.2067, -33.856, 0.0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2019, 12, 4).unwrap();
/// let rise = utc_sunrise(&sydney, date, &SunriseOptions::default()).unwrap();
/// assert!(rise.occurs().is_some());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(longitude = location.longitude(), latitude = location.latitude(), %date))]
pub fn utc_sunrise(
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
) -> Result<SolarEventResult, CalculationError> {
    utc_event(location, date, options, SunEvent::Rise)
}

/// Sunset on the UT date `date`, as a UTC instant.
#[tracing::instrument(level = "debug", skip_all, fields(longitude = location.longitude(), latitude = location.latitude(), %date))]
pub fn utc_sunset(
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
) -> Result<SolarEventResult, CalculationError> {
    utc_event(location, date, options, SunEvent::Set)
}

fn zoned_event<R: TimeZoneResolver>(
    resolver: &R,
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
    event: SunEvent,
) -> Result<SolarEventResult<DateTime<R::Zone>>, CalculationError> {
    let zone = resolver.resolve(location.longitude(), location.latitude())?;
    let result = utc_event(location, date, options, event)?;

    let local_date = match result {
        SolarEventResult::Occurs(instant) => instant.with_timezone(&zone).date_naive(),
        SolarEventResult::AllDay => return Ok(SolarEventResult::AllDay),
        SolarEventResult::AllNight => return Ok(SolarEventResult::AllNight),
    };

    // Far from the zone meridian the UT date can yield an event on the
    // neighbouring civil date; shift once and recompute.
    let result = if local_date == date {
        result
    } else {
        let diff = date.num_days_from_ce() - local_date.num_days_from_ce();
        let shifted = if diff > 0 {
            date.checked_add_days(Days::new(u64::from(diff.unsigned_abs())))
        } else {
            date.checked_sub_days(Days::new(u64::from(diff.unsigned_abs())))
        }
        .ok_or(CalculationError::TimeConversionError)?;
        tracing::debug!(%date, %local_date, %shifted, "civil date differs, recomputing");
        utc_event(location, shifted, options, event)?
    };
    Ok(result.map(|instant| instant.with_timezone(&zone)))
}

/// Sunrise on the civil date `date` in the zone `resolver` finds for `location`.
#[tracing::instrument(level = "debug", skip_all, fields(longitude = location.longitude(), latitude = location.latitude(), %date))]
pub fn sunrise<R: TimeZoneResolver>(
    resolver: &R,
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
) -> Result<SolarEventResult<DateTime<R::Zone>>, CalculationError> {
    zoned_event(resolver, location, date, options, SunEvent::Rise)
}

/// Sunset on the civil date `date` in the zone `resolver` finds for `location`.
#[tracing::instrument(level = "debug", skip_all, fields(longitude = location.longitude(), latitude = location.latitude(), %date))]
pub fn sunset<R: TimeZoneResolver>(
    resolver: &R,
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
) -> Result<SolarEventResult<DateTime<R::Zone>>, CalculationError> {
    zoned_event(resolver, location, date, options, SunEvent::Set)
}

/// Minutes after 0h UT of apparent solar noon at `longitude`.
pub fn solar_noon_minutes(julian_day: f64, longitude: f64) -> f64 {
    // First pass at the mean local noon.
    let t_mean = julian_centuries_from_julian_day(julian_day + 0.5 - longitude / 360.0);
    let noon = 720.0 - 4.0 * longitude - equation_of_time(t_mean);
    let t_noon = julian_centuries_from_julian_day(julian_day + noon / MINUTES_PER_DAY);
    720.0 - 4.0 * longitude - equation_of_time(t_noon)
}

/// Apparent solar noon (the Sun's transit) on UT date `date`.
pub fn solar_noon(location: &Location, date: NaiveDate) -> Result<DateTime<Utc>, CalculationError> {
    let minutes = solar_noon_minutes(julian_day_from_date(date), location.longitude());
    utc_from_moment(moment_from_date(date) + minutes / MINUTES_PER_DAY)
}

/// Hours between sunrise and sunset on UT date `date`.
///
/// 24 under the midnight sun, 0 in polar night.
pub fn hours_of_daylight(
    location: &Location,
    date: NaiveDate,
    options: &SunriseOptions,
) -> Result<f64, CalculationError> {
    let rise = utc_sunrise(location, date, options)?;
    let set = utc_sunset(location, date, options)?;
    Ok(match (rise, set) {
        (SolarEventResult::Occurs(rise), SolarEventResult::Occurs(set)) => {
            (set - rise).num_milliseconds() as f64 / 3_600_000.0
        }
        (SolarEventResult::AllDay, _) | (_, SolarEventResult::AllDay) => 24.0,
        _ => 0.0,
    })
}
