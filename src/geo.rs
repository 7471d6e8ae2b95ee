//! Observer location.

use crate::earth::EARTH_RADIUS;
use crate::time::local_mean_time_offset;
use crate::types::CalculationError;

/// A point on the Earth: longitude positive East, latitude positive North,
/// elevation in meters above sea level.
///
/// Coordinates are validated on construction, so every `Location` the event
/// solvers see is in range.
///
/// # Example
///
/// ```
/// use lunisolar::Location;
///
/// let sydney = Location::new(151.2067, -33.856, 0.0).unwrap();
/// assert_eq!(sydney.latitude(), -33.856);
/// assert!(Location::new(181.0, 0.0, 0.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    longitude: f64,
    latitude: f64,
    elevation: f64,
}

impl Location {
    /// # Errors
    ///
    /// Longitude must be in [-180, 180], latitude in [-90, 90] and the
    /// elevation within one Earth radius of sea level.
    pub fn new(longitude: f64, latitude: f64, elevation: f64) -> Result<Self, CalculationError> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-EARTH_RADIUS..=EARTH_RADIUS).contains(&elevation) {
            return Err(CalculationError::ElevationOutOfRange);
        }
        Ok(Self {
            longitude,
            latitude,
            elevation,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Offset of local mean time from UT, in days.
    pub fn local_mean_time_offset(&self) -> f64 {
        local_mean_time_offset(self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(Location::new(-180.5, 0.0, 0.0), Err(CalculationError::LongitudeOutOfRange));
        assert_eq!(Location::new(0.0, 90.01, 0.0), Err(CalculationError::LatitudeOutOfRange));
        assert_eq!(Location::new(0.0, 0.0, -7.0e6), Err(CalculationError::ElevationOutOfRange));
        assert_eq!(Location::new(f64::NAN, 0.0, 0.0), Err(CalculationError::LongitudeOutOfRange));
    }

    #[test]
    fn accepts_boundaries() {
        let loc = Location::new(180.0, -90.0, -430.0).unwrap();
        assert_eq!(loc.longitude(), 180.0);
        assert_eq!(loc.latitude(), -90.0);
        assert_eq!(loc.elevation(), -430.0);
    }

    #[test]
    fn local_mean_time_follows_longitude() {
        let loc = Location::new(90.0, 0.0, 0.0).unwrap();
        assert_eq!(loc.local_mean_time_offset(), 0.25);
    }
}
