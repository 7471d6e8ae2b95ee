//! Continuity tests for the event solvers.
//!
//! Events on consecutive days (or years) should move by small amounts. A
//! sudden jump points at a wrapped angle or a day boundary handled wrongly.

use chrono::{DateTime, Days, NaiveDate, Utc};
use proptest::prelude::*;

use crate::{season_start, solar_noon, utc_sunrise, utc_sunset, Location, Season, SunriseOptions};

fn day_diff_seconds(today: DateTime<Utc>, yesterday: DateTime<Utc>) -> f64 {
    let adjusted = yesterday.checked_add_days(Days::new(1)).unwrap();
    (today - adjusted).as_seconds_f64().abs()
}

proptest! {
    #[test]
    fn sun_events_change_smoothly_over_consecutive_days(
        days_from_ce in 693_596i32..=766_644,
        longitude in -180.0..=180.0,
        latitude in -65.0_f64..=65.0_f64,
        elevation in -400.0..=4000.0,
    ) {
        let start = NaiveDate::from_num_days_from_ce_opt(days_from_ce).unwrap();
        let location = Location::new(longitude, latitude, elevation).unwrap();
        let options = SunriseOptions::default();

        // Close to the polar circles sunrise drifts much faster.
        let max_jump_seconds = if latitude.abs() > 55.0 { 3.0 * 3600.0 } else { 3600.0 };

        let mut prev_noon: Option<DateTime<Utc>> = None;
        let mut prev_sunrise: Option<DateTime<Utc>> = None;
        let mut prev_sunset: Option<DateTime<Utc>> = None;

        for day_offset in 0..10 {
            let date = start.checked_add_days(Days::new(day_offset)).unwrap();

            let noon = solar_noon(&location, date).unwrap();
            let sunrise = utc_sunrise(&location, date, &options).unwrap().occurs();
            let sunset = utc_sunset(&location, date, &options).unwrap().occurs();

            if let Some(prev) = prev_noon {
                let diff = day_diff_seconds(noon, prev);
                // The equation of time moves by well under a minute a day.
                prop_assert!(diff < 60.0, "Noon jumped {} seconds: {} -> {}", diff, prev, noon);
            }
            prev_noon = Some(noon);

            if let (Some(prev), Some(curr)) = (prev_sunrise, sunrise) {
                let diff = day_diff_seconds(curr, prev);
                prop_assert!(diff < max_jump_seconds,
                    "Sunrise jumped {} seconds: {} -> {}. Max allowed: {} seconds",
                    diff, prev, curr, max_jump_seconds);
            }
            prev_sunrise = sunrise;

            if let (Some(prev), Some(curr)) = (prev_sunset, sunset) {
                let diff = day_diff_seconds(curr, prev);
                prop_assert!(diff < max_jump_seconds,
                    "Sunset jumped {} seconds: {} -> {}. Max allowed: {} seconds",
                    diff, prev, curr, max_jump_seconds);
            }
            prev_sunset = sunset;
        }
    }

    #[test]
    fn seasons_recur_after_a_tropical_year(year in 1000i32..3000) {
        for season in [Season::March, Season::June, Season::September, Season::December] {
            let this_year = season_start(year, season).unwrap();
            let next_year = season_start(year + 1, season).unwrap();
            let days = (next_year - this_year).as_seconds_f64() / 86_400.0;
            prop_assert!((days - 365.2422).abs() < 0.05, "{:?} {}: {} days", season, year, days);
        }
    }
}
