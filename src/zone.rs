//! Civil time zones.
//!
//! Position and event calculations never need a zone. Only the civil-time
//! variants of the sunrise and sunset functions consult a
//! [`TimeZoneResolver`], and its errors are passed back unchanged.
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

use crate::types::CalculationError;

/// Resolves the civil time zone in force at a coordinate.
pub trait TimeZoneResolver {
    type Zone: TimeZone;

    fn resolve(&self, longitude: f64, latitude: f64) -> Result<Self::Zone, CalculationError>;
}

/// A resolver that answers every coordinate with one fixed UTC offset.
///
/// ```
/// use chrono::FixedOffset;
/// use lunisolar::zone::{FixedZone, TimeZoneResolver};
///
/// let aest = FixedZone(FixedOffset::east_opt(10 * 3600).unwrap());
/// assert_eq!(aest.resolve(151.2, -33.9).unwrap().local_minus_utc(), 36000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedZone(pub FixedOffset);

impl TimeZoneResolver for FixedZone {
    type Zone = FixedOffset;

    fn resolve(&self, _longitude: f64, _latitude: f64) -> Result<FixedOffset, CalculationError> {
        Ok(self.0)
    }
}

/// Shifts a UTC instant into civil time in `zone`.
pub fn shift_to_zone<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> DateTime<Z> {
    instant.with_timezone(zone)
}

/// Seconds `zone` is ahead of UTC at `instant`.
pub fn utc_offset_seconds<Z: TimeZone>(zone: &Z, instant: DateTime<Utc>) -> i32 {
    instant.with_timezone(zone).offset().fix().local_minus_utc()
}

#[cfg(feature = "tz")]
pub use self::tzf::TzfResolver;

#[cfg(feature = "tz")]
mod tzf {
    extern crate std;

    use std::sync::OnceLock;

    use chrono_tz::Tz;
    use tzf_rs::DefaultFinder;

    use super::TimeZoneResolver;
    use crate::types::CalculationError;

    // Building the finder decompresses the boundary data; do it once.
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();

    /// Looks zones up in the bundled IANA boundary polygons and resolves
    /// them to `chrono_tz` zones with full historical rules.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct TzfResolver;

    impl TimeZoneResolver for TzfResolver {
        type Zone = Tz;

        fn resolve(&self, longitude: f64, latitude: f64) -> Result<Tz, CalculationError> {
            let finder = FINDER.get_or_init(DefaultFinder::new);
            let name = finder.get_tz_name(longitude, latitude);
            if name.is_empty() {
                return Err(CalculationError::TimeZoneNotFound { longitude, latitude });
            }
            tracing::debug!(name, longitude, latitude, "resolved time zone");
            name.parse::<Tz>().map_err(|_| CalculationError::UnknownTimeZone)
        }
    }
}
