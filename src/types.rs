use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculationError {
    /// Longitude outside [-180, 180] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// Latitude outside [-90, 90] degrees
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Observer elevation more than one Earth radius from sea level
    #[error("Elevation out of range")]
    ElevationOutOfRange,

    /// Numeric solar elevation target outside [0, 180] degrees
    #[error("Solar elevation target out of range")]
    ElevationTargetOutOfRange,

    /// Equinox or solstice year outside 1000..=3000
    #[error("Year {year} is outside the supported range 1000..=3000")]
    YearOutOfRange { year: i32 },

    /// Moment or Julian day not representable as a chrono date-time
    #[error("Time conversion error")]
    TimeConversionError,

    /// The resolver found no zone for the coordinate
    #[error("No time zone found for ({longitude}, {latitude})")]
    TimeZoneNotFound { longitude: f64, latitude: f64 },

    /// The resolved zone name is not in the IANA database
    #[error("Unknown time zone")]
    UnknownTimeZone,

    /// A lunation search exceeded its step limit
    #[error("Lunation search did not converge")]
    NoConvergence,
}

/// Result of a solar event calculation (sunrise, sunset, twilight, etc.)
///
/// When the hour-angle cosine falls outside [-1, 1] the Sun never crosses
/// the requested elevation on that day; that is reported here rather than
/// as an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEventResult<T = DateTime<Utc>> {
    /// Event occurs at the given instant
    Occurs(T),
    /// Sun is always above the threshold (e.g., midnight sun)
    AllDay,
    /// Sun is always below the threshold (e.g., polar night)
    AllNight,
}

impl<T> SolarEventResult<T> {
    /// Extracts the instant from a solar event result.
    ///
    /// # Returns
    ///
    /// - `Some(t)` if the event occurs at a specific time
    /// - `None` if the sun is always above or always below the threshold
    pub fn occurs(self) -> Option<T> {
        match self {
            SolarEventResult::Occurs(t) => Some(t),
            _ => None,
        }
    }

    /// Transforms the instant of an occurring event, keeping polar results.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SolarEventResult<U> {
        match self {
            SolarEventResult::Occurs(t) => SolarEventResult::Occurs(f(t)),
            SolarEventResult::AllDay => SolarEventResult::AllDay,
            SolarEventResult::AllNight => SolarEventResult::AllNight,
        }
    }

    /// Like [`map`](Self::map) with a fallible transform.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<SolarEventResult<U>, E> {
        Ok(match self {
            SolarEventResult::Occurs(t) => SolarEventResult::Occurs(f(t)?),
            SolarEventResult::AllDay => SolarEventResult::AllDay,
            SolarEventResult::AllNight => SolarEventResult::AllNight,
        })
    }
}

/// Which horizon crossing to solve for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SunEvent {
    Rise,
    Set,
}

/// Solar elevation the rise/set solver targets, as a zenith angle in degrees.
///
/// Named levels resolve through a lookup table. Only [`Geometric`] is later
/// corrected for refraction, solar radius and observer elevation; the
/// twilight levels and raw degrees are used as given.
///
/// [`Geometric`]: SolarElevation::Geometric
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarElevation {
    #[default]
    Geometric,
    Civil,
    Nautical,
    Astronomical,
    Degrees(f64),
}

impl SolarElevation {
    /// Zenith angle in degrees before any Earth adjustment.
    pub fn degrees(self) -> f64 {
        match self {
            SolarElevation::Geometric => 90.0,
            SolarElevation::Civil => 96.0,
            SolarElevation::Nautical => 102.0,
            SolarElevation::Astronomical => 108.0,
            SolarElevation::Degrees(d) => d,
        }
    }

    pub(crate) fn validate(self) -> Result<Self, CalculationError> {
        if let SolarElevation::Degrees(d) = self {
            if !(0.0..=180.0).contains(&d) {
                return Err(CalculationError::ElevationTargetOutOfRange);
            }
        }
        Ok(self)
    }
}

/// Named lunar phases and the Sun–Moon elongation that defines them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl LunarPhase {
    pub fn degrees(self) -> f64 {
        match self {
            LunarPhase::New => 0.0,
            LunarPhase::FirstQuarter => 90.0,
            LunarPhase::Full => 180.0,
            LunarPhase::LastQuarter => 270.0,
        }
    }
}

/// The four solstice/equinox events of a year, by the month they fall in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    March,
    June,
    September,
    December,
}

impl Season {
    pub fn is_solstice(self) -> bool {
        matches!(self, Season::June | Season::December)
    }

    pub fn is_equinox(self) -> bool {
        !self.is_solstice()
    }
}

/// Equatorial position of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees, signed
    pub declination: f64,
    /// Geocentric distance: astronomical units for the Sun, metres for the Moon
    pub distance: f64,
}
