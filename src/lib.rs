//! # Lunisolar
//!
//! Low-precision positions of the Sun and Moon, and the events derived from
//! them: sunrise, sunset and twilight, solar noon, equinoxes and solstices,
//! lunar phases and new moons.
//!
//! The models are the published truncated series (Meeus, *Astronomical
//! Algorithms*; the NOAA solar calculator; Reingold and Dershowitz's
//! calendrical formulas). Every function is pure and works on plain floats
//! and `chrono` values, so the crate is `no_std`.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use lunisolar::{utc_sunrise, utc_sunset, Location, SolarEventResult, SunriseOptions};
//!
//! // Sydney, longitude positive East, latitude positive North
//! let sydney = Location::new(151.2067, -33.856, 0.0).unwrap();
//! let date = NaiveDate::from_ymd_opt(2019, 12, 4).unwrap();
//! let options = SunriseOptions::default();
//!
//! match utc_sunrise(&sydney, date, &options).unwrap() {
//!     SolarEventResult::Occurs(instant) => println!("Sunrise at {instant}"),
//!     SolarEventResult::AllDay => println!("Sun never sets (midnight sun)"),
//!     SolarEventResult::AllNight => println!("Sun never rises (polar night)"),
//! }
//! assert!(utc_sunset(&sydney, date, &options).unwrap().occurs().is_some());
//! ```
//!
//! ## Time scales
//!
//! Internally an instant is a *moment*: fractional days since the Rata Die
//! epoch (0001-01-01 00:00 proleptic Gregorian). The position series are
//! evaluated in dynamical time; the conversion uses [`time::ephemeris_correction`].
//! Equinoxes and solstices use the separate year-keyed table in [`delta_t`].
//!
//! ## Features
//!
//! - `tz`: resolves the civil time zone of a coordinate with `tzf-rs` and
//!   `chrono-tz` ([`zone::TzfResolver`]). Requires `std`.
//! - `serde`: `Serialize`/`Deserialize` for the public value types.
#![no_std]

pub mod delta_t;
pub mod earth;
pub mod geo;
pub mod lunar;
pub mod math;
pub mod phase;
pub mod season;
pub mod solar;
pub mod sunrise;
pub(crate) mod tables;
pub mod time;
pub mod types;
pub mod zone;


pub use geo::Location;
pub use phase::{
    date_time_lunar_phase_at_or_after, date_time_lunar_phase_at_or_before, date_time_new_moon_at_or_after,
    date_time_new_moon_before, lunar_phase, lunar_phase_at, lunar_phase_at_or_after, lunar_phase_at_or_before,
    moon_illumination_at, new_moon_at_or_after, new_moon_before,
};
pub use season::{equinoxes, season_start, solstices};
pub use sunrise::{hours_of_daylight, solar_noon, sunrise, sunset, utc_sunrise, utc_sunset, SunriseOptions};
pub use types::{
    CalculationError, EquatorialPosition, LunarPhase, Season, SolarElevation, SolarEventResult, SunEvent,
};
pub use zone::{FixedZone, TimeZoneResolver};
