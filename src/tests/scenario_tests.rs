//! Known events checked against published almanac times.

use chrono::{Datelike, FixedOffset, TimeZone, Timelike};
use chrono_tz::Australia::Sydney;

use super::{date, seconds_apart, utc, NamedZone, Nowhere};
use crate::lunar::nth_new_moon;
use crate::math::floored_mod;
use crate::sunrise::{sun_event_hours, sun_event_minutes};
use crate::time::julian_day_from_date;
use crate::*;

fn sydney() -> Location {
    Location::new(151.2067, -33.856, 0.0).unwrap()
}

fn alert() -> Location {
    Location::new(-62.3481, 82.5018, 0.0).unwrap()
}

#[test]
fn sydney_sunrise_in_local_time() {
    let rise = sunrise(&NamedZone(Sydney), &sydney(), date(2019, 12, 4), &SunriseOptions::default())
        .unwrap()
        .occurs()
        .unwrap();
    assert_eq!(rise.date_naive(), date(2019, 12, 4));
    let expected = Sydney.with_ymd_and_hms(2019, 12, 4, 5, 37, 0).unwrap();
    assert!(seconds_apart(&rise, &expected) <= 60, "sunrise at {rise}");
}

#[test]
fn sydney_sunset_in_local_time() {
    let set = sunset(&NamedZone(Sydney), &sydney(), date(2019, 12, 4), &SunriseOptions::default())
        .unwrap()
        .occurs()
        .unwrap();
    let expected = Sydney.with_ymd_and_hms(2019, 12, 4, 19, 53, 0).unwrap();
    assert!(seconds_apart(&set, &expected) <= 60, "sunset at {set}");
}

#[test]
fn sydney_sunrise_hour_of_day_in_ut() {
    let zenith = crate::earth::adjusted_solar_elevation(SolarElevation::Geometric, 0.0);
    let hours = sun_event_hours(julian_day_from_date(date(2019, 12, 4)), -33.856, 151.2067, zenith, SunEvent::Rise)
        .unwrap()
        .occurs()
        .unwrap();
    // 18:37 UT on the previous UT day
    assert!((hours - (18.0 + 37.0 / 60.0)).abs() < 1.0 / 60.0, "{hours}");
}

#[test]
fn raw_event_solver_rejects_out_of_range_coordinates() {
    let jd = julian_day_from_date(date(2019, 12, 4));
    assert_eq!(
        sun_event_hours(jd, 91.0, 151.2067, 90.0, SunEvent::Rise),
        Err(CalculationError::LatitudeOutOfRange)
    );
    assert_eq!(
        sun_event_minutes(jd, -33.856, -180.5, 90.0, SunEvent::Set),
        Err(CalculationError::LongitudeOutOfRange)
    );
    assert!(sun_event_minutes(jd, -90.0, 180.0, 90.0, SunEvent::Set).is_ok());
}

#[test]
fn phase_is_continuous_through_new_moon() {
    let distance = |a: f64, b: f64| (floored_mod(a - b + 180.0, 360.0) - 180.0).abs();
    for n in [24_000, 24_724, 24_800, 24_900] {
        let new_moon = nth_new_moon(n);
        // The naive longitude difference can sit just under 360 here; the
        // lunation estimate wins and the phase reads as zero.
        let at = lunar_phase(new_moon);
        assert!(at < 0.05, "lunation {n}: phase {at}");

        let mut previous = lunar_phase(new_moon - 10.0 / 1440.0);
        for minute in -9..=10 {
            let phase = lunar_phase(new_moon + f64::from(minute) / 1440.0);
            assert!((0.0..360.0).contains(&phase));
            assert!(distance(phase, previous) < 0.1, "lunation {n}, minute {minute}: {previous} -> {phase}");
            previous = phase;
        }
    }
}

#[test]
fn polar_night_and_midnight_sun_have_no_event() {
    let options = SunriseOptions::default();
    for day in [date(2019, 12, 4), date(2019, 7, 1)] {
        assert!(utc_sunrise(&alert(), day, &options).unwrap().occurs().is_none());
        assert!(utc_sunset(&alert(), day, &options).unwrap().occurs().is_none());
    }
    assert_eq!(utc_sunrise(&alert(), date(2019, 12, 4), &options).unwrap(), SolarEventResult::AllNight);
    assert_eq!(utc_sunset(&alert(), date(2019, 7, 1), &options).unwrap(), SolarEventResult::AllDay);
    assert_eq!(hours_of_daylight(&alert(), date(2019, 12, 4), &options).unwrap(), 0.0);
    assert_eq!(hours_of_daylight(&alert(), date(2019, 7, 1), &options).unwrap(), 24.0);
}

#[test]
fn polar_result_survives_zone_lookup() {
    let zone = FixedZone(FixedOffset::west_opt(4 * 3600).unwrap());
    let result = sunrise(&zone, &alert(), date(2019, 12, 4), &SunriseOptions::default()).unwrap();
    assert_eq!(result, SolarEventResult::AllNight);
}

#[test]
fn zone_lookup_failure_is_propagated() {
    let err = sunrise(&Nowhere, &sydney(), date(2019, 12, 4), &SunriseOptions::default()).unwrap_err();
    assert_eq!(
        err,
        CalculationError::TimeZoneNotFound {
            longitude: 151.2067,
            latitude: -33.856
        }
    );
}

#[test]
fn civil_date_is_corrected_far_from_zone_meridian() {
    // Greenwich observed from a UTC-12 clock: the UT date's sunrise lands on
    // the previous civil day, so the solver must move to the next UT date.
    let greenwich = Location::new(0.0, 51.4769, 0.0).unwrap();
    let zone = FixedZone(FixedOffset::west_opt(12 * 3600).unwrap());
    let requested = date(2019, 6, 21);
    let rise = sunrise(&zone, &greenwich, requested, &SunriseOptions::default())
        .unwrap()
        .occurs()
        .unwrap();
    assert_eq!(rise.date_naive(), requested);
    assert_eq!(rise.naive_utc().date(), date(2019, 6, 22));
}

#[test]
fn twilight_precedes_sunrise() {
    let day = date(2019, 12, 4);
    let rise = utc_sunrise(&sydney(), day, &SunriseOptions::default()).unwrap().occurs().unwrap();
    let mut previous = rise;
    for level in [SolarElevation::Civil, SolarElevation::Nautical, SolarElevation::Astronomical] {
        let dawn = utc_sunrise(&sydney(), day, &SunriseOptions::with_solar_elevation(level))
            .unwrap()
            .occurs()
            .unwrap();
        assert!(dawn < previous, "{level:?} at {dawn}");
        previous = dawn;
    }
}

#[test]
fn elevated_observer_sees_earlier_sunrise() {
    let day = date(2019, 12, 4);
    let high = Location::new(151.2067, -33.856, 1500.0).unwrap();
    let sea = utc_sunrise(&sydney(), day, &SunriseOptions::default()).unwrap().occurs().unwrap();
    let up = utc_sunrise(&high, day, &SunriseOptions::default()).unwrap().occurs().unwrap();
    assert!(up < sea);
    assert!(seconds_apart(&up, &sea) < 15 * 60);
}

#[test]
fn invalid_elevation_target_is_rejected() {
    let options = SunriseOptions::with_solar_elevation(SolarElevation::Degrees(181.0));
    assert_eq!(
        utc_sunrise(&sydney(), date(2019, 12, 4), &options),
        Err(CalculationError::ElevationTargetOutOfRange)
    );
}

#[test]
fn solar_noon_in_sydney() {
    let noon = solar_noon(&sydney(), date(2019, 12, 4)).unwrap();
    assert_eq!((noon.hour(), noon.minute()), (1, 45));
}

#[test]
fn hours_of_daylight_by_latitude() {
    let options = SunriseOptions::default();
    let equator = Location::new(0.0, 0.0, 0.0).unwrap();
    let london = Location::new(0.0, 51.5, 0.0).unwrap();
    let equinox_day = hours_of_daylight(&equator, date(2019, 3, 20), &options).unwrap();
    assert!((equinox_day - 12.11).abs() < 0.05, "{equinox_day}");
    let midsummer = hours_of_daylight(&london, date(2019, 6, 21), &options).unwrap();
    assert!((midsummer - 16.64).abs() < 0.05, "{midsummer}");
}

#[test]
fn solstices_of_2019() {
    let december = season_start(2019, Season::December).unwrap();
    assert!(seconds_apart(&december, &utc(2019, 12, 22, 4, 18)) <= 120, "{december}");
    let june = season_start(2019, Season::June).unwrap();
    assert!(seconds_apart(&june, &utc(2019, 6, 21, 15, 53)) <= 120, "{june}");
}

#[test]
fn equinoxes_of_2019() {
    let (march, september) = equinoxes(2019).unwrap();
    assert!(seconds_apart(&march, &utc(2019, 3, 20, 21, 58)) <= 120, "{march}");
    assert!(seconds_apart(&september, &utc(2019, 9, 23, 7, 50)) <= 120, "{september}");
}

#[test]
fn full_moon_of_august_2021() {
    let full = date_time_lunar_phase_at_or_after(LunarPhase::Full, &utc(2021, 8, 1, 0, 0)).unwrap();
    assert!(seconds_apart(&full, &utc(2021, 8, 22, 12, 1)) <= 240, "{full}");
}

#[test]
fn quarters_of_august_2021() {
    let start = utc(2021, 8, 1, 0, 0);
    let first = date_time_lunar_phase_at_or_after(LunarPhase::FirstQuarter, &start).unwrap();
    assert!(seconds_apart(&first, &utc(2021, 8, 15, 15, 20)) <= 240, "{first}");
    let last = date_time_lunar_phase_at_or_after(LunarPhase::LastQuarter, &start).unwrap();
    assert!(seconds_apart(&last, &utc(2021, 8, 30, 7, 13)) <= 240, "{last}");
    let previous_full = date_time_lunar_phase_at_or_before(LunarPhase::Full, &start).unwrap();
    assert!(seconds_apart(&previous_full, &utc(2021, 7, 24, 2, 37)) <= 240, "{previous_full}");
}

#[test]
fn new_moons_around_august_2021() {
    let start = utc(2021, 8, 1, 0, 0);
    let before = date_time_new_moon_before(&start).unwrap();
    assert!(seconds_apart(&before, &utc(2021, 7, 10, 1, 17)) <= 120, "{before}");
    let after = date_time_new_moon_at_or_after(&start).unwrap();
    assert!(seconds_apart(&after, &utc(2021, 8, 8, 13, 50)) <= 120, "{after}");
    let by_phase = date_time_lunar_phase_at_or_after(LunarPhase::New, &start).unwrap();
    assert!(seconds_apart(&after, &by_phase) <= 240);
}

#[test]
fn moon_is_full_and_lit_on_august_22() {
    let instant = utc(2021, 8, 22, 12, 0);
    let phase = lunar_phase_at(&instant);
    assert!((phase - 180.0).abs() < 0.5, "{phase}");
    assert!(moon_illumination_at(&instant) > 0.99);
    let new = utc(2021, 8, 8, 13, 50);
    assert!(moon_illumination_at(&new) < 0.01);
    assert_eq!(new.with_timezone(&Sydney).day(), 8);
}
