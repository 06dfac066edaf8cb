//! Projection scale lookups.
//!
//! The camera needs two numbers from the map projection: the pixel width of
//! the whole world at a zoom scale, and the ground distance covered by one
//! pixel at a latitude. [`ProjectionScale`] is the seam; [`WebMercator`] is the
//! spherical Web Mercator implementation with a configurable tile size.

use std::f64::consts::TAU;

/// Equatorial radius of the WGS84 ellipsoid in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Largest latitude representable in square Web Mercator.
pub const LATITUDE_MAX: f64 = 85.051_128_779_806_604;

/// Default raster tile size in pixels.
pub const DEFAULT_TILE_SIZE: f64 = 512.0;

/// World size and ground resolution provider.
///
/// Implementations must be monotonic in zoom and agree with the renderer on
/// what a pixel is.
pub trait ProjectionScale {
    /// Pixel width of the world at zoom scale `scale` (`2^zoom`).
    fn world_size(&self, scale: f64) -> f64;

    /// Meters covered by one pixel at `latitude` degrees and `zoom`.
    fn meters_per_pixel_at_latitude(&self, latitude: f64, zoom: f64) -> f64;
}

/// Spherical Web Mercator with square tiles of `tile_size` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    /// Tile edge length in pixels.
    pub tile_size: f64,
}

impl WebMercator {
    /// Projection with the given tile size in pixels.
    #[must_use]
    pub const fn new(tile_size: f64) -> Self {
        Self { tile_size }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl ProjectionScale for WebMercator {
    #[inline]
    fn world_size(&self, scale: f64) -> f64 {
        scale * self.tile_size
    }

    /// Latitude is clamped to [`LATITUDE_MAX`] so the poles keep a finite,
    /// non-zero resolution.
    fn meters_per_pixel_at_latitude(&self, latitude: f64, zoom: f64) -> f64 {
        let lat = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX);
        lat.to_radians().cos() * TAU * EARTH_RADIUS_M
            / self.world_size(zoom.exp2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_size_scales_with_tile_size() {
        let p = WebMercator::default();
        assert_eq!(p.world_size(1.0), 512.0);
        assert_eq!(p.world_size(4.0), 2048.0);
        assert_eq!(WebMercator::new(256.0).world_size(2.0), 512.0);
    }

    #[test]
    fn equator_resolution_at_zoom_zero() {
        let p = WebMercator::default();
        let expected = TAU * EARTH_RADIUS_M / 512.0;
        let got = p.meters_per_pixel_at_latitude(0.0, 0.0);
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn resolution_halves_per_zoom_level() {
        let p = WebMercator::default();
        let z0 = p.meters_per_pixel_at_latitude(45.0, 0.0);
        let z1 = p.meters_per_pixel_at_latitude(45.0, 1.0);
        assert!((z0 / z1 - 2.0).abs() < 1e-12);
        assert!(z1 < z0);
    }

    #[test]
    fn latitude_is_clamped_near_the_poles() {
        let p = WebMercator::default();
        let at_max = p.meters_per_pixel_at_latitude(LATITUDE_MAX, 3.0);
        assert_eq!(p.meters_per_pixel_at_latitude(90.0, 3.0), at_max);
        assert!(at_max > 0.0);
    }
}
