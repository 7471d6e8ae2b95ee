//! Solar position.
//!
//! Two independent models live here:
//!
//! - the NOAA low-precision formulas (functions of Julian centuries `t`),
//!   used by the sunrise, sunset and noon solvers;
//! - the 49-term periodic series of [`solar_longitude`] (a function of a
//!   moment), used where the Sun must agree closely with the lunar model,
//!   such as phase crossings.
//!
//! They are not interchangeable; each is calibrated against its callers.
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::earth::{nutation, obliquity};
use crate::math::{
    arcsin_degrees, arctan_degrees, cos_degrees, invert_angular, normalize_degrees_360, polynomial, sigma,
    sin_degrees, tan_degrees,
};
use crate::tables::SOLAR_LONGITUDE_TERMS;
use crate::time::{julian_centuries, julian_centuries_from_julian_day, moment_from_julian_day};
use crate::types::EquatorialPosition;

/// Mean tropical year in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242189;

/// Semi-major axis of the Earth's orbit in AU, as used by the NOAA distance formula.
const SEMI_MAJOR_AXIS: f64 = 1.000_001_018;

/// Longitude of the ascending node of the Moon's mean orbit, NOAA short form.
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun in degrees, [0, 360).
pub fn sun_geom_mean_lon(t: f64) -> f64 {
    normalize_degrees_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t))
}

/// Geometric mean anomaly of the Sun in degrees, [0, 360).
pub fn sun_geom_mean_anomaly(t: f64) -> f64 {
    normalize_degrees_360(polynomial(&[357.52911, 35999.05029, -0.0001537], t))
}

/// Eccentricity of the Earth's orbit (unitless).
pub fn earth_orbit_eccentricity(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Equation of the center of the Sun in degrees.
pub fn sun_equation_of_center(t: f64) -> f64 {
    let m = sun_geom_mean_anomaly(t);
    sin_degrees(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin_degrees(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin_degrees(3.0 * m) * 0.000289
}

/// True longitude of the Sun in degrees.
pub fn sun_true_lon(t: f64) -> f64 {
    sun_geom_mean_lon(t) + sun_equation_of_center(t)
}

/// True anomaly of the Sun in degrees.
///
/// This is the form the distance formula uses: the mean anomaly advanced by
/// `t` rather than by the equation of the center.
pub fn true_anomaly(t: f64) -> f64 {
    normalize_degrees_360(sun_geom_mean_anomaly(t) + t)
}

/// Apparent longitude of the Sun in degrees (NOAA short correction).
pub fn sun_apparent_lon(t: f64) -> f64 {
    sun_true_lon(t) - 0.00569 - 0.00478 * sin_degrees(omega(t))
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_ecliptic_obliquity(t: f64) -> f64 {
    obliquity(t)
}

/// Obliquity corrected for nutation, in degrees.
pub fn obliquity_corr(t: f64) -> f64 {
    mean_ecliptic_obliquity(t) + 0.00256 * cos_degrees(omega(t))
}

/// Declination of the Sun in degrees (signed).
pub fn solar_declination(t: f64) -> f64 {
    arcsin_degrees(sin_degrees(obliquity_corr(t)) * sin_degrees(sun_apparent_lon(t)))
}

/// Right ascension of the Sun in degrees, [0, 360).
pub fn solar_right_ascension(t: f64) -> f64 {
    let lambda = sun_apparent_lon(t);
    arctan_degrees(cos_degrees(obliquity_corr(t)) * sin_degrees(lambda), cos_degrees(lambda))
}

/// Difference between apparent and mean solar time, in minutes.
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_corr(t);
    let l0 = sun_geom_mean_lon(t);
    let e = earth_orbit_eccentricity(t);
    let m = sun_geom_mean_anomaly(t);
    let y = tan_degrees(epsilon / 2.0).powi(2);

    let eq_time = y * sin_degrees(2.0 * l0) - 2.0 * e * sin_degrees(m)
        + 4.0 * e * y * sin_degrees(m) * cos_degrees(2.0 * l0)
        - 0.5 * y * y * sin_degrees(4.0 * l0)
        - 1.25 * e * e * sin_degrees(2.0 * m);
    4.0 * eq_time.to_degrees()
}

/// Earth–Sun distance in AU.
pub fn sun_distance(t: f64) -> f64 {
    let e = earth_orbit_eccentricity(t);
    SEMI_MAJOR_AXIS * (1.0 - e * e) / (1.0 + e * cos_degrees(true_anomaly(t)))
}

/// Equatorial position of the Sun at a Julian day (UT).
pub fn sun_position_at(julian_day: f64) -> EquatorialPosition {
    let t = julian_centuries_from_julian_day(julian_day);
    EquatorialPosition {
        right_ascension: solar_right_ascension(t),
        declination: solar_declination(t),
        distance: sun_distance(t),
    }
}

/// Aberration of the Sun's longitude in degrees, for dynamical centuries `c`.
pub fn aberration(c: f64) -> f64 {
    0.0000974 * cos_degrees(177.63 + 35999.01848 * c) - 0.005575
}

/// Apparent geocentric longitude of the Sun at a universal-time moment, in
/// degrees [0, 360).
///
/// Evaluates the 49-term periodic series in dynamical time and adds
/// aberration and nutation.
pub fn solar_longitude(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let series = sigma(&SOLAR_LONGITUDE_TERMS, |&[x, y, z]| x * sin_degrees(y + z * c));
    let lambda = 282.7771834 + 36000.76953744 * c + 0.000005729577951308232 * series;
    normalize_degrees_360(lambda + aberration(c) + nutation(c))
}

/// [`solar_longitude`] for a Julian day (UT).
pub fn solar_longitude_at(julian_day: f64) -> f64 {
    solar_longitude(moment_from_julian_day(julian_day))
}

/// Moment at which [`solar_longitude`] equals `lambda`, searched on or after `moment`.
pub fn solar_longitude_after(lambda: f64, moment: f64) -> f64 {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = moment + rate * normalize_degrees_360(lambda - solar_longitude(moment));
    let a = moment.max(tau - 5.0);
    let b = tau + 5.0;
    invert_angular(solar_longitude, lambda, a, b)
}
