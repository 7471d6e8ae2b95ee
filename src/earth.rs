//! Earth-orientation quantities and horizon geometry.
//!
//! Obliquity and nutation feed both position models. The horizon helpers
//! turn a [`SolarElevation`] target into the zenith angle the rise/set
//! solver actually uses.
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{angle, arccos_degrees, polynomial, sin_degrees};
use crate::types::SolarElevation;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Standard atmospheric refraction at the horizon, in degrees (34′).
pub const REFRACTION: f64 = 34.0 / 60.0;

/// Apparent angular radius of the Sun, in degrees (16′).
pub const SOLAR_RADIUS: f64 = 16.0 / 60.0;

/// Mean obliquity of the ecliptic in degrees for Julian centuries since J2000.0.
///
/// `23°26′21.448″ − 46.815″T − 0.00059″T² + 0.001813″T³`.
pub fn obliquity(c: f64) -> f64 {
    angle(23.0, 26.0, 21.448) + polynomial(&[0.0, -46.8150, -0.00059, 0.001813], c) / 3600.0
}

/// Nutation in longitude, in degrees (two leading terms).
pub fn nutation(c: f64) -> f64 {
    let a = polynomial(&[124.90, -1934.134, 0.002063], c);
    let b = polynomial(&[201.11, 72001.5377, 0.00057], c);
    -0.004778 * sin_degrees(a) - 0.0003667 * sin_degrees(b)
}

/// Dip of the horizon in degrees for an observer `elevation` meters above
/// the reference sphere.
///
/// The sign follows the elevation: observers below sea level see a horizon
/// raised above the geometric one.
pub fn horizon_dip(elevation: f64) -> f64 {
    if elevation.abs() < 1e-5 {
        return 0.0;
    }
    let ratio = (EARTH_RADIUS / (EARTH_RADIUS + elevation.abs())).clamp(-1.0, 1.0);
    let dip = arccos_degrees(ratio);
    if elevation > 0.0 {
        dip
    } else {
        -dip
    }
}

/// Zenith angle correction for a geometric horizon crossing: solar radius,
/// refraction and horizon dip.
pub fn elevation_adjustment(elevation: f64) -> f64 {
    SOLAR_RADIUS + REFRACTION + horizon_dip(elevation)
}

/// Zenith angle in degrees the rise/set solver targets.
///
/// Only the geometric horizon is corrected. Twilight levels and raw degree
/// targets pass through unchanged.
pub fn adjusted_solar_elevation(target: SolarElevation, elevation: f64) -> f64 {
    match target {
        SolarElevation::Geometric => target.degrees() + elevation_adjustment(elevation),
        _ => target.degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((obliquity(0.0) - 23.439_291).abs() < 1e-6);
        assert!(obliquity(1.0) < obliquity(0.0));
    }

    #[test]
    fn nutation_is_small() {
        for c in [-2.0, -0.5, 0.0, 0.19, 1.0] {
            assert!(nutation(c).abs() <= 0.004_778 + 0.000_366_7);
        }
    }

    #[test]
    fn horizon_dip_sign_and_magnitude() {
        assert_eq!(horizon_dip(0.0), 0.0);
        let up = horizon_dip(1000.0);
        let down = horizon_dip(-450.0);
        assert!(up > 0.9 && up < 1.1, "{up}");
        assert!(down < -0.6 && down > -0.75, "{down}");
    }

    #[test]
    fn only_geometric_target_is_adjusted() {
        let sea = adjusted_solar_elevation(SolarElevation::Geometric, 0.0);
        assert!((sea - (90.0 + 50.0 / 60.0)).abs() < 1e-12);
        assert!(adjusted_solar_elevation(SolarElevation::Geometric, 500.0) > sea);
        assert_eq!(adjusted_solar_elevation(SolarElevation::Civil, 500.0), 96.0);
        assert_eq!(adjusted_solar_elevation(SolarElevation::Nautical, 0.0), 102.0);
        assert_eq!(adjusted_solar_elevation(SolarElevation::Astronomical, 0.0), 108.0);
        assert_eq!(adjusted_solar_elevation(SolarElevation::Degrees(93.5), 800.0), 93.5);
    }
}
