//! Lunar position model.
//!
//! Truncated ELP-2000/82 series from Meeus chapter 47 for longitude,
//! latitude and distance, the chapter 49 new-moon solver, and the
//! equatorial and horizontal conversions built on them. Every function of
//! a moment takes universal time and evaluates the series in dynamical time.
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::earth::{nutation, obliquity};
use crate::geo::Location;
use crate::math::{
    arcsin_degrees, arctan_degrees, cos_degrees, mod3, normalize_degrees_360, polynomial, sigma, sin_degrees,
    tan_degrees,
};
use crate::tables::{
    LUNAR_LATITUDE_TERMS, LUNAR_LONGITUDE_DISTANCE_TERMS, NEW_MOON_ADDITIONAL_TERMS, NEW_MOON_TERMS,
};
use crate::time::{julian_centuries, moment_from_julian_day, universal_from_dynamical, J2000};
use crate::types::EquatorialPosition;

/// Mean length of a lunation in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

/// Mean Earth–Moon distance in meters.
const MEAN_LUNAR_DISTANCE: f64 = 385_000_560.0;

/// Earth equatorial radius in meters, as used for lunar parallax.
const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_140.0;

/// Lunations from the Rata Die epoch to the new moon of 2000 January 6.
const LUNATION_OFFSET: i64 = 24_724;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Moon's mean longitude L′, degrees.
pub fn mean_lunar_longitude(c: f64) -> f64 {
    normalize_degrees_360(polynomial(
        &[218.3164477, 481267.88123421, -0.0015786, 1.0 / 538841.0, -1.0 / 65194000.0],
        c,
    ))
}

/// Mean elongation of the Moon D, degrees.
pub fn lunar_elongation(c: f64) -> f64 {
    normalize_degrees_360(polynomial(
        &[297.8501921, 445267.1114034, -0.0018819, 1.0 / 545868.0, -1.0 / 113065000.0],
        c,
    ))
}

/// Sun's mean anomaly M, degrees.
pub fn solar_anomaly(c: f64) -> f64 {
    normalize_degrees_360(polynomial(&[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0], c))
}

/// Moon's mean anomaly M′, degrees.
pub fn lunar_anomaly(c: f64) -> f64 {
    normalize_degrees_360(polynomial(
        &[134.9633964, 477198.8675055, 0.0087414, 1.0 / 69699.0, -1.0 / 14712000.0],
        c,
    ))
}

/// Moon's argument of latitude F, degrees.
pub fn moon_node(c: f64) -> f64 {
    normalize_degrees_360(polynomial(
        &[93.2720950, 483202.0175233, -0.0036539, -1.0 / 3526000.0, 1.0 / 863310000.0],
        c,
    ))
}

/// Eccentricity factor `E` applied once per power of the solar anomaly in a term.
fn eccentricity_factor(c: f64) -> f64 {
    polynomial(&[1.0, -0.002516, -0.0000074], c)
}

struct Arguments {
    l: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    e: f64,
}

impl Arguments {
    fn new(c: f64) -> Self {
        Self {
            l: mean_lunar_longitude(c),
            d: lunar_elongation(c),
            m: solar_anomaly(c),
            m_prime: lunar_anomaly(c),
            f: moon_node(c),
            e: eccentricity_factor(c),
        }
    }

    /// `E^|m| · (D·d + M·m + M′·m′ + F·f)` for one table row.
    fn term(&self, d: f64, m: f64, m_prime: f64, f: f64) -> (f64, f64) {
        let weight = self.e.powi(m.abs() as i32);
        let argument = d * self.d + m * self.m + m_prime * self.m_prime + f * self.f;
        (weight, argument)
    }
}

/// Apparent geocentric ecliptic longitude of the Moon, degrees [0, 360).
pub fn lunar_longitude(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let args = Arguments::new(c);
    let correction = sigma(&LUNAR_LONGITUDE_DISTANCE_TERMS, |&[d, m, m_prime, f, v, _]| {
        let (weight, argument) = args.term(d, m, m_prime, f);
        v * weight * sin_degrees(argument)
    }) / 1_000_000.0;
    let venus = 0.003958 * sin_degrees(119.75 + 131.849 * c);
    let jupiter = 0.000318 * sin_degrees(53.09 + 479264.29 * c);
    let flat_earth = 0.001962 * sin_degrees(args.l - args.f);
    normalize_degrees_360(args.l + correction + venus + jupiter + flat_earth + nutation(c))
}

/// Geocentric ecliptic latitude of the Moon, signed degrees.
pub fn lunar_latitude(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let args = Arguments::new(c);
    let latitude = sigma(&LUNAR_LATITUDE_TERMS, |&[d, m, m_prime, f, v]| {
        let (weight, argument) = args.term(d, m, m_prime, f);
        v * weight * sin_degrees(argument)
    }) / 1_000_000.0;
    let a1 = 119.75 + 131.849 * c;
    let venus = 0.000175 * (sin_degrees(a1 + args.f) + sin_degrees(a1 - args.f));
    let flat_earth = -0.002235 * sin_degrees(args.l) + 0.000127 * sin_degrees(args.l - args.m_prime)
        - 0.000115 * sin_degrees(args.l + args.m_prime);
    let extra = 0.000382 * sin_degrees(313.45 + 481266.484 * c);
    latitude + venus + flat_earth + extra
}

/// Earth–Moon distance in meters, centre to centre.
pub fn lunar_distance(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let args = Arguments::new(c);
    let correction = sigma(&LUNAR_LONGITUDE_DISTANCE_TERMS, |&[d, m, m_prime, f, _, r]| {
        let (weight, argument) = args.term(d, m, m_prime, f);
        r * weight * cos_degrees(argument)
    });
    MEAN_LUNAR_DISTANCE + correction
}

/// Moment (universal time) of the `n`-th new moon after the Rata Die epoch.
///
/// `n = 24724` is the new moon of 2000 January 6. Accurate to well under a
/// minute between roughly -2000 and +4000.
pub fn nth_new_moon(n: i64) -> f64 {
    let k = (n - LUNATION_OFFSET) as f64;
    let c = k / LUNATIONS_PER_CENTURY;
    let approx = J2000
        + polynomial(
            &[
                5.09766,
                MEAN_SYNODIC_MONTH * LUNATIONS_PER_CENTURY,
                0.00015437,
                -0.000000150,
                0.00000000073,
            ],
            c,
        );
    let e = eccentricity_factor(c);
    let solar_anomaly = polynomial(&[2.5534, 1236.85 * 29.10535670, -0.0000014, -0.00000011], c);
    let lunar_anomaly = polynomial(
        &[201.5643, 385.81693528 * 1236.85, 0.0107582, 0.00001238, -0.000000058],
        c,
    );
    let moon_argument = polynomial(
        &[160.7108, 390.67050284 * 1236.85, -0.0016118, -0.00000227, 0.000000011],
        c,
    );
    let omega = polynomial(&[124.7746, -1.56375588 * 1236.85, 0.0020672, 0.00000215], c);

    let correction = -0.00017 * sin_degrees(omega)
        + sigma(&NEW_MOON_TERMS, |&[v, w, x, y, z]| {
            v * e.powi(w as i32) * sin_degrees(x * solar_anomaly + y * lunar_anomaly + z * moon_argument)
        });
    let extra = 0.000325 * sin_degrees(polynomial(&[299.77, 132.8475848, -0.009173], c));
    let additional = sigma(&NEW_MOON_ADDITIONAL_TERMS, |&[i, j, l]| l * sin_degrees(i + j * k));

    universal_from_dynamical(approx + correction + extra + additional)
}

/// Mean sidereal time at Greenwich in degrees [0, 360), for a universal-time moment.
pub fn sidereal_from_moment(moment: f64) -> f64 {
    let c = (moment - J2000) / 36525.0;
    normalize_degrees_360(polynomial(
        &[280.46061837, 36525.0 * 360.98564736629, 0.000387933, -1.0 / 38710000.0],
        c,
    ))
}

/// Right ascension from ecliptic coordinates, degrees [0, 360).
fn right_ascension(moment: f64, latitude: f64, longitude: f64) -> f64 {
    let epsilon = obliquity(julian_centuries(moment));
    arctan_degrees(
        sin_degrees(longitude) * cos_degrees(epsilon) - tan_degrees(latitude) * sin_degrees(epsilon),
        cos_degrees(longitude),
    )
}

/// Declination from ecliptic coordinates, signed degrees.
fn declination(moment: f64, latitude: f64, longitude: f64) -> f64 {
    let epsilon = obliquity(julian_centuries(moment));
    arcsin_degrees(
        sin_degrees(latitude) * cos_degrees(epsilon)
            + cos_degrees(latitude) * sin_degrees(epsilon) * sin_degrees(longitude),
    )
}

pub fn lunar_right_ascension(moment: f64) -> f64 {
    right_ascension(moment, lunar_latitude(moment), lunar_longitude(moment))
}

pub fn lunar_declination(moment: f64) -> f64 {
    declination(moment, lunar_latitude(moment), lunar_longitude(moment))
}

/// Geocentric altitude of the Moon above the horizon at `location`, degrees in [-180, 180).
pub fn lunar_altitude(moment: f64, location: &Location) -> f64 {
    let phi = location.latitude();
    let psi = location.longitude();
    let lambda = lunar_longitude(moment);
    let beta = lunar_latitude(moment);
    let alpha = right_ascension(moment, beta, lambda);
    let delta = declination(moment, beta, lambda);
    let theta0 = sidereal_from_moment(moment);
    let hour_angle = normalize_degrees_360(theta0 + psi - alpha);
    let altitude = arcsin_degrees(
        sin_degrees(phi) * sin_degrees(delta) + cos_degrees(phi) * cos_degrees(delta) * cos_degrees(hour_angle),
    );
    mod3(altitude, -180.0, 180.0)
}

/// Parallax of the Moon in altitude at `location`, degrees.
pub fn lunar_parallax(moment: f64, location: &Location) -> f64 {
    let geo = lunar_altitude(moment, location);
    let delta = lunar_distance(moment);
    let sin_pi = EARTH_EQUATORIAL_RADIUS / delta;
    arcsin_degrees(sin_pi * cos_degrees(geo))
}

/// Altitude of the Moon as seen from the surface at `location`, degrees.
pub fn topocentric_lunar_altitude(moment: f64, location: &Location) -> f64 {
    lunar_altitude(moment, location) - lunar_parallax(moment, location)
}

/// Equatorial position of the Moon at a Julian day (UT); distance in meters.
pub fn moon_position_at(julian_day: f64) -> EquatorialPosition {
    let moment = moment_from_julian_day(julian_day);
    let lambda = lunar_longitude(moment);
    let beta = lunar_latitude(moment);
    EquatorialPosition {
        right_ascension: right_ascension(moment, beta, lambda),
        declination: declination(moment, beta, lambda),
        distance: lunar_distance(moment),
    }
}

/// Illuminated fraction of the Moon's disk, 0 (new) to 1 (full).
///
/// Uses the low-precision phase angle of Meeus chapter 48.
pub fn illuminated_fraction_of_moon(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let d = lunar_elongation(c);
    let m = solar_anomaly(c);
    let m_prime = lunar_anomaly(c);
    let i = 180.0 - d - 6.289 * sin_degrees(m_prime) + 2.100 * sin_degrees(m)
        - 1.274 * sin_degrees(2.0 * d - m_prime)
        - 0.658 * sin_degrees(2.0 * d)
        - 0.214 * sin_degrees(2.0 * m_prime)
        - 0.110 * sin_degrees(d);
    (1.0 + cos_degrees(i)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{dynamical_from_universal, JD_EPOCH};

    /// Universal moment whose dynamical time is the given JDE.
    fn ut_for_jde(jde: f64) -> f64 {
        universal_from_dynamical(jde - JD_EPOCH)
    }

    #[test]
    fn meeus_example_47_a() {
        // 1992 April 12, 0h TD
        let t = ut_for_jde(2448724.5);
        let c = julian_centuries(t);
        assert!((c - -0.077221081451).abs() < 1e-8, "{c}");
        assert!((mean_lunar_longitude(c) - 134.290182).abs() < 1e-5);
        assert!((lunar_elongation(c) - 113.842304).abs() < 1e-5);
        assert!((solar_anomaly(c) - 97.643514).abs() < 1e-5);
        assert!((lunar_anomaly(c) - 5.150833).abs() < 1e-5);
        assert!((moon_node(c) - 219.889721).abs() < 1e-5);

        // Geometric 133.162655 plus the two-term nutation.
        let lambda = lunar_longitude(t);
        assert!((lambda - (133.162655 + nutation(c))).abs() < 1e-4, "{lambda}");
        assert!((lunar_latitude(t) - -3.229126).abs() < 1e-4);
        assert!((lunar_distance(t) - 368_409_685.0).abs() < 500.0);

        assert!((lunar_right_ascension(t) - 134.688470).abs() < 0.01);
        assert!((lunar_declination(t) - 13.768368).abs() < 0.01);
    }

    #[test]
    fn meeus_example_49_a() {
        // New moon of 1977 February 18, k = -283: JDE 2443192.65118
        let n = LUNATION_OFFSET - 283;
        let t = nth_new_moon(n);
        let jde = dynamical_from_universal(t) + JD_EPOCH;
        assert!((jde - 2443192.65118).abs() < 2e-4, "{jde}");
    }

    #[test]
    fn new_moon_of_january_2000() {
        // 2000-01-06 18:14 UT
        let t = nth_new_moon(LUNATION_OFFSET);
        let expected = J2000 + 4.5 + (18.0 + 14.0 / 60.0) / 24.0;
        assert!((t - expected).abs() < 2.0 / 1440.0, "{t} {expected}");
    }

    #[test]
    fn meeus_example_12_a() {
        // 1987 April 10, 19:21:00 UT
        let t = moment_from_julian_day(2446896.30625);
        assert!((sidereal_from_moment(t) - 128.7378734).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_48_a() {
        let k = illuminated_fraction_of_moon(ut_for_jde(2448724.5));
        assert!((k - 0.6786).abs() < 0.003, "{k}");
    }

    #[test]
    fn parallax_lowers_the_moon() {
        let sydney = Location::new(151.2067, -33.856, 0.0).unwrap();
        for hour in 0..24 {
            let t = ut_for_jde(2459448.5) + f64::from(hour) / 24.0;
            let geo = lunar_altitude(t, &sydney);
            let parallax = lunar_parallax(t, &sydney);
            assert!((-90.0..=90.0).contains(&geo));
            assert!((0.0..1.03).contains(&parallax), "{parallax}");
            assert!((topocentric_lunar_altitude(t, &sydney) - (geo - parallax)).abs() < 1e-12);
        }
    }

    #[test]
    fn moon_position_matches_components() {
        let jd = 2459448.5;
        let pos = moon_position_at(jd);
        let t = moment_from_julian_day(jd);
        assert_eq!(pos.right_ascension, lunar_right_ascension(t));
        assert_eq!(pos.declination, lunar_declination(t));
        assert!((356_000_000.0..407_000_000.0).contains(&pos.distance));
    }
}
