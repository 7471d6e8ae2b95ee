//! Time scales: calendar dates, Julian days and centuries, moments, and the
//! conversion between universal and dynamical time.
//!
//! A *moment* is a fractional day count on the Rata Die scale: moment 1.0 is
//! 0001-01-01T00:00 in the proleptic Gregorian calendar and the fractional
//! part is the time of day.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use julian_day_converter::unix_millis_to_julian_day;

use crate::math::{floored_mod, polynomial};
use crate::types::CalculationError;

/// Julian day of moment zero.
pub const JD_EPOCH: f64 = 1_721_424.5;

/// Moment of 2000-01-01T12:00 (JD 2451545.0).
pub const J2000: f64 = 730_120.5;

const JD_J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fixed (Rata Die) day number of a proleptic Gregorian date.
pub fn fixed_from_gregorian(year: i64, month: i64, day: i64) -> i64 {
    let y = year - 1;
    let leap_adjust = if month <= 2 {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + (367 * month - 362).div_euclid(12)
        + leap_adjust
        + day
}

/// Proleptic Gregorian year containing fixed day `date`.
pub fn gregorian_year_from_fixed(date: i64) -> i64 {
    let d0 = date - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = floored_mod(d0, 146_097);
    let n100 = d1.div_euclid(36_524);
    let d2 = floored_mod(d1, 36_524);
    let n4 = d2.div_euclid(1_461);
    let d3 = floored_mod(d2, 1_461);
    let n1 = d3.div_euclid(365);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        year
    } else {
        year + 1
    }
}

pub(crate) fn is_leap_year(year: i64) -> bool {
    floored_mod(year, 4) == 0 && !matches!(floored_mod(year, 400), 100 | 200 | 300)
}

/// Julian day at 0h UT of a proleptic Gregorian date (always ends in `.5`).
pub fn julian_day_from_date(date: NaiveDate) -> f64 {
    moment_from_date(date) + JD_EPOCH
}

/// Julian day of a naive (UT) date-time, including the fraction of the day.
pub fn julian_day_from_datetime(datetime: NaiveDateTime) -> f64 {
    moment_from_datetime(datetime) + JD_EPOCH
}

/// Julian day of an instant in any chrono `TimeZone`.
///
/// The offset is removed before conversion, so the result is always UT.
pub fn julian_day_from_utc<T: TimeZone>(date: &DateTime<T>) -> f64 {
    unix_millis_to_julian_day(date.timestamp_millis())
}

/// Civil date-time (UT) of a Julian day. Time of day is truncated to the second.
pub fn datetime_from_julian_day(julian_day: f64) -> Result<NaiveDateTime, CalculationError> {
    datetime_from_moment(moment_from_julian_day(julian_day))
}

/// Julian centuries since J2000.0 from a Julian day.
pub fn julian_centuries_from_julian_day(julian_day: f64) -> f64 {
    (julian_day - JD_J2000) / DAYS_PER_CENTURY
}

/// Julian day from Julian centuries since J2000.0.
pub fn julian_day_from_julian_centuries(centuries: f64) -> f64 {
    centuries * DAYS_PER_CENTURY + JD_J2000
}

pub fn moment_from_julian_day(julian_day: f64) -> f64 {
    julian_day - JD_EPOCH
}

pub fn julian_day_from_moment(moment: f64) -> f64 {
    moment + JD_EPOCH
}

/// Dynamical-time Julian centuries since J2000.0 for a universal-time moment.
///
/// The solar longitude series and the lunar model are evaluated on this scale.
pub fn julian_centuries(moment: f64) -> f64 {
    (dynamical_from_universal(moment) - J2000) / DAYS_PER_CENTURY
}

pub fn moment_from_date(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

pub fn moment_from_datetime(datetime: NaiveDateTime) -> f64 {
    let seconds = f64::from(datetime.num_seconds_from_midnight())
        + f64::from(datetime.nanosecond().min(999_999_999)) / 1_000_000_000.0;
    moment_from_date(datetime.date()) + seconds / SECONDS_PER_DAY
}

/// Splits a fraction of a day into hours, minutes and seconds.
///
/// Each unit is truncated, not rounded: a fraction of 23.999 hours gives
/// `(23, 59, 56)`, never a roll-over to midnight.
pub fn time_from_day_fraction(fraction: f64) -> (u32, u32, u32) {
    let hours = fraction * 24.0;
    let h = hours.trunc();
    let minutes = (hours - h) * 60.0;
    let m = minutes.trunc();
    let s = ((minutes - m) * 60.0).trunc();
    (h as u32, m as u32, s as u32)
}

/// Civil date-time of a moment, truncating to the second.
pub fn datetime_from_moment(moment: f64) -> Result<NaiveDateTime, CalculationError> {
    if !moment.is_finite() {
        return Err(CalculationError::TimeConversionError);
    }
    let day = moment.floor();
    if day < f64::from(i32::MIN) || day > f64::from(i32::MAX) {
        return Err(CalculationError::TimeConversionError);
    }
    let date = NaiveDate::from_num_days_from_ce_opt(day as i32).ok_or(CalculationError::TimeConversionError)?;
    let (h, m, s) = time_from_day_fraction(moment - day);
    let time = NaiveTime::from_hms_opt(h, m, s).ok_or(CalculationError::TimeConversionError)?;
    Ok(date.and_time(time))
}

pub fn utc_from_moment(moment: f64) -> Result<DateTime<Utc>, CalculationError> {
    datetime_from_moment(moment).map(|dt| dt.and_utc())
}

pub fn moment_from_utc<T: TimeZone>(date: &DateTime<T>) -> f64 {
    moment_from_datetime(date.naive_utc())
}

/// ΔT (dynamical minus universal time) in days for a moment.
///
/// Piecewise polynomial fits by year, in the form used by Reingold and
/// Dershowitz. Used by every model evaluated in dynamical time.
pub fn ephemeris_correction(moment: f64) -> f64 {
    let year = gregorian_year_from_fixed(moment.floor() as i64);
    let y = year as f64;
    let c = (fixed_from_gregorian(year, 7, 1) - fixed_from_gregorian(1900, 1, 1)) as f64 / DAYS_PER_CENTURY;
    let seconds = |s: f64| s / SECONDS_PER_DAY;

    match year {
        2051..=2150 => seconds(-20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2) + 0.5628 * (2150.0 - y)),
        2006..=2050 => seconds(polynomial(&[62.92, 0.32217, 0.005589], y - 2000.0)),
        1987..=2005 => seconds(polynomial(
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
            y - 2000.0,
        )),
        1900..=1986 => polynomial(
            &[-0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066, -0.212591],
            c,
        ),
        1800..=1899 => polynomial(
            &[
                -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267, 38.291999, 28.316289,
                11.636204, 2.043794,
            ],
            c,
        ),
        1700..=1799 => seconds(polynomial(
            &[8.118780842, -0.005092142, 0.003336121, -0.0000266484],
            y - 1700.0,
        )),
        1600..=1699 => seconds(polynomial(&[120.0, -0.9808, -0.01532, 0.000140272128], y - 1600.0)),
        500..=1599 => seconds(polynomial(
            &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
            (y - 1000.0) / 100.0,
        )),
        -499..=499 => seconds(polynomial(
            &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
            y / 100.0,
        )),
        _ => seconds(polynomial(&[-20.0, 0.0, 32.0], (y - 1820.0) / 100.0)),
    }
}

pub fn dynamical_from_universal(moment: f64) -> f64 {
    moment + ephemeris_correction(moment)
}

pub fn universal_from_dynamical(moment: f64) -> f64 {
    moment - ephemeris_correction(moment)
}

/// Offset of local mean time from UT, in days (`longitude / 360`).
pub fn local_mean_time_offset(longitude: f64) -> f64 {
    longitude / 360.0
}

/// Minutes from midnight folded to an hour of the day in [0, 24).
pub fn hours_from_minutes(minutes: f64) -> f64 {
    floored_mod(minutes / 60.0, 24.0)
}
