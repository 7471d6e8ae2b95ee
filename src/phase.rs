//! Lunar phases and new moons.
//!
//! The phase is the Moon's elongation in longitude from the Sun: 0° at new
//! moon, 90° first quarter, 180° full, 270° last quarter. Crossings are
//! located by bisection around the mean-motion estimate.
use chrono::{DateTime, TimeZone, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::lunar::{illuminated_fraction_of_moon, lunar_longitude, nth_new_moon, MEAN_SYNODIC_MONTH};
use crate::math::{final_index, floored_mod, invert_angular, next, normalize_degrees_360};
use crate::solar::solar_longitude;
use crate::time::{moment_from_utc, utc_from_moment};
use crate::types::{CalculationError, LunarPhase};

/// Half-width in days of the bracket searched around the mean estimate.
const PHASE_BRACKET: f64 = 2.0;

/// Lunar phase in degrees [0, 360) at a universal-time moment.
///
/// Near syzygy the difference of two independently truncated longitudes can
/// land on the wrong side of 0°/360°. When it disagrees by more than 180°
/// with the phase implied by the surrounding new moons, the latter wins.
pub fn lunar_phase(moment: f64) -> f64 {
    let phi = normalize_degrees_360(lunar_longitude(moment) - solar_longitude(moment));
    let t0 = nth_new_moon(0);
    let n = ((moment - t0) / MEAN_SYNODIC_MONTH).round() as i64;
    let phi_prime = 360.0 * floored_mod((moment - nth_new_moon(n)) / MEAN_SYNODIC_MONTH, 1.0);
    if (phi - phi_prime).abs() > 180.0 {
        phi_prime
    } else {
        phi
    }
}

/// Last moment at or before `moment` when the phase was `phi` degrees.
pub fn lunar_phase_at_or_before(phi: f64, moment: f64) -> f64 {
    let tau = moment - MEAN_SYNODIC_MONTH / 360.0 * floored_mod(lunar_phase(moment) - phi, 360.0);
    let a = tau - PHASE_BRACKET;
    let b = moment.min(tau + PHASE_BRACKET);
    invert_angular(lunar_phase, phi, a, b)
}

/// First moment at or after `moment` when the phase is `phi` degrees.
pub fn lunar_phase_at_or_after(phi: f64, moment: f64) -> f64 {
    let tau = moment + MEAN_SYNODIC_MONTH / 360.0 * floored_mod(phi - lunar_phase(moment), 360.0);
    let a = moment.max(tau - PHASE_BRACKET);
    let b = tau + PHASE_BRACKET;
    invert_angular(lunar_phase, phi, a, b)
}

/// Lunation index near `moment`, corrected by the current phase so it
/// names the most recent new moon.
fn lunation_estimate(moment: f64) -> i64 {
    let t0 = nth_new_moon(0);
    let phi = lunar_phase(moment);
    ((moment - t0) / MEAN_SYNODIC_MONTH - phi / 360.0).round() as i64
}

/// Moment of the last new moon strictly before `moment`.
pub fn new_moon_before(moment: f64) -> Result<f64, CalculationError> {
    let n = lunation_estimate(moment);
    final_index(n - 1, |k| nth_new_moon(k) < moment)
        .map(nth_new_moon)
        .ok_or(CalculationError::NoConvergence)
}

/// Moment of the first new moon at or after `moment`.
pub fn new_moon_at_or_after(moment: f64) -> Result<f64, CalculationError> {
    let n = lunation_estimate(moment);
    next(n, |k| nth_new_moon(k) >= moment)
        .map(nth_new_moon)
        .ok_or(CalculationError::NoConvergence)
}

/// Phase in degrees at an instant.
pub fn lunar_phase_at<T: TimeZone>(instant: &DateTime<T>) -> f64 {
    lunar_phase(moment_from_utc(instant))
}

/// Illuminated fraction of the Moon's disk at an instant.
pub fn moon_illumination_at<T: TimeZone>(instant: &DateTime<T>) -> f64 {
    illuminated_fraction_of_moon(moment_from_utc(instant))
}

/// Next time at or after `instant` the Moon reaches `phase`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunisolar::{date_time_lunar_phase_at_or_after, LunarPhase};
///
/// let start = Utc.with_ymd_and_hms(2021, 8, 1, 0, 0, 0).unwrap();
/// let full = date_time_lunar_phase_at_or_after(LunarPhase::Full, &start).unwrap();
/// assert_eq!(full.date_naive().to_string(), "2021-08-22");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(phase = ?phase))]
pub fn date_time_lunar_phase_at_or_after<T: TimeZone>(
    phase: LunarPhase,
    instant: &DateTime<T>,
) -> Result<DateTime<Utc>, CalculationError> {
    utc_from_moment(lunar_phase_at_or_after(phase.degrees(), moment_from_utc(instant)))
}

/// Last time at or before `instant` the Moon was at `phase`.
#[tracing::instrument(level = "debug", skip_all, fields(phase = ?phase))]
pub fn date_time_lunar_phase_at_or_before<T: TimeZone>(
    phase: LunarPhase,
    instant: &DateTime<T>,
) -> Result<DateTime<Utc>, CalculationError> {
    utc_from_moment(lunar_phase_at_or_before(phase.degrees(), moment_from_utc(instant)))
}

pub fn date_time_new_moon_before<T: TimeZone>(instant: &DateTime<T>) -> Result<DateTime<Utc>, CalculationError> {
    utc_from_moment(new_moon_before(moment_from_utc(instant))?)
}

pub fn date_time_new_moon_at_or_after<T: TimeZone>(
    instant: &DateTime<T>,
) -> Result<DateTime<Utc>, CalculationError> {
    utc_from_moment(new_moon_at_or_after(moment_from_utc(instant))?)
}
