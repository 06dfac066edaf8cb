//! Conversions between geographic coordinates and normalized mercator space.
//!
//! Mercator space is the Web Mercator plane scaled to `[0, 1] x [0, 1]`, with
//! X growing east and Y growing south. Heights are stored in the same
//! normalized units, scaled by the local pixels-per-meter at zoom 0 so that
//! they stay zoom independent.

/// Forward and inverse mercator mappings.
pub mod mercator;
/// World size and ground resolution lookups.
pub mod scale;

pub use mercator::{
    from_mercator, lat_from_mercator_y, lng_from_mercator_x,
    mercator_x_from_lng, mercator_y_from_lat, to_mercator,
};
pub use scale::{ProjectionScale, WebMercator};
