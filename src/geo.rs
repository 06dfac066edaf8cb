//! Geographic coordinates.

/// Latitude/longitude pair in degrees.
///
/// Values are neither validated nor wrapped; latitudes at or beyond ±90°
/// project to non-finite mercator coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl LatLng {
    /// Creates a location from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[inline]
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}
