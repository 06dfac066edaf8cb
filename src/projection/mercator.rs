//! Forward and inverse Web Mercator mappings onto the unit square.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use glam::DVec3;

use super::scale::ProjectionScale;
use crate::geo::LatLng;

/// Normalized mercator X for a longitude in degrees.
#[inline]
#[must_use]
pub const fn mercator_x_from_lng(lng: f64) -> f64 {
    (180.0 + lng) / 360.0
}

/// Normalized mercator Y for a latitude in degrees.
///
/// Y grows southwards; the equator maps to `0.5`. Diverges towards `∓∞` as
/// latitude approaches `±90`. No clamping is applied.
#[inline]
#[must_use]
pub fn mercator_y_from_lat(lat: f64) -> f64 {
    (180.0 - (180.0 / PI * (FRAC_PI_4 + lat * PI / 360.0).tan().ln())) / 360.0
}

/// Latitude in degrees for a normalized mercator Y.
#[inline]
#[must_use]
pub fn lat_from_mercator_y(y: f64) -> f64 {
    (2.0 * (PI - y * TAU).exp().atan() - FRAC_PI_2).to_degrees()
}

/// Longitude in degrees for a normalized mercator X.
#[inline]
#[must_use]
pub const fn lng_from_mercator_x(x: f64) -> f64 {
    x * 360.0 - 180.0
}

/// Projects a location and an altitude in meters into mercator space.
///
/// The altitude is converted with the pixels-per-meter at the location's
/// latitude and divided by the world size, both evaluated at zoom 0.
#[must_use]
pub fn to_mercator(
    location: LatLng,
    altitude_meters: f64,
    projection: &impl ProjectionScale,
) -> DVec3 {
    let pixels_per_meter = 1.0
        / projection.meters_per_pixel_at_latitude(location.latitude(), 0.0);
    let world_size = projection.world_size(0.0_f64.exp2());

    DVec3::new(
        mercator_x_from_lng(location.longitude()),
        mercator_y_from_lat(location.latitude()),
        altitude_meters * pixels_per_meter / world_size,
    )
}

/// Inverse of [`to_mercator`]: location and altitude in meters.
#[must_use]
pub fn from_mercator(
    position: DVec3,
    projection: &impl ProjectionScale,
) -> (LatLng, f64) {
    let location = LatLng::new(
        lat_from_mercator_y(position.y),
        lng_from_mercator_x(position.x),
    );

    let meters_per_pixel =
        projection.meters_per_pixel_at_latitude(location.latitude(), 0.0);
    let world_size = projection.world_size(0.0_f64.exp2());
    let altitude = position.z * world_size * meters_per_pixel;

    (location, altitude)
}
