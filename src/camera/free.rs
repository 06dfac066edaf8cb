//! Geographic view of a camera placement.
//!
//! [`FreeCameraOptions`] lets application code describe where the camera is
//! and where it points in latitude/longitude/meters and degrees, without
//! touching mercator math. [`Camera::apply_free_camera_options`] hands the
//! result to a camera.

use glam::DVec3;

use super::core::{
    orientation_from_pitch_bearing, pitch_bearing_towards, Camera,
};
use crate::geo::LatLng;
use crate::math::Quaternion;
use crate::projection::{
    from_mercator, to_mercator, ProjectionScale, WebMercator,
};

/// Mercator position that may not have been set yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MercatorPosition {
    /// No position; reads resolve to [`MercatorPosition::DEFAULT`].
    #[default]
    Unset,
    /// Explicit mercator-space position.
    At(DVec3),
}

impl MercatorPosition {
    /// Position assumed when none has been set.
    pub const DEFAULT: DVec3 = DVec3::new(0.0, 0.0, 1.0);

    /// The stored position, or [`MercatorPosition::DEFAULT`] when unset.
    #[inline]
    #[must_use]
    pub const fn resolve(self) -> DVec3 {
        match self {
            Self::Unset => Self::DEFAULT,
            Self::At(position) => position,
        }
    }

    /// The stored position, if any.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<DVec3> {
        match self {
            Self::Unset => None,
            Self::At(position) => Some(position),
        }
    }
}

impl From<DVec3> for MercatorPosition {
    fn from(position: DVec3) -> Self {
        Self::At(position)
    }
}

/// Camera placement expressed in geographic terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FreeCameraOptions<P = WebMercator> {
    /// Mercator-space camera position.
    pub position: MercatorPosition,
    /// Camera orientation, if one has been chosen.
    pub orientation: Option<Quaternion>,
    projection: P,
}

impl FreeCameraOptions {
    /// Empty options using the default Web Mercator projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ProjectionScale> FreeCameraOptions<P> {
    /// Empty options converting through `projection`.
    #[must_use]
    pub const fn with_projection(projection: P) -> Self {
        Self {
            position: MercatorPosition::Unset,
            orientation: None,
            projection,
        }
    }

    /// Places the camera at `location`, `altitude_meters` above sea level.
    pub fn set_location(&mut self, location: LatLng, altitude_meters: f64) {
        self.position = MercatorPosition::At(to_mercator(
            location,
            altitude_meters,
            &self.projection,
        ));
    }

    /// Camera location and altitude in meters.
    ///
    /// An unset position reads as mercator `(0, 0, 1)`.
    #[must_use]
    pub fn location(&self) -> (LatLng, f64) {
        from_mercator(self.position.resolve(), &self.projection)
    }

    /// Orients the camera from pitch and bearing in degrees.
    pub fn set_pitch_bearing(&mut self, pitch: f64, bearing: f64) {
        self.orientation = Some(orientation_from_pitch_bearing(
            pitch.to_radians(),
            bearing.to_radians(),
        ));
    }

    /// Orients the camera towards `location` at sea level.
    ///
    /// Needs a position to look from; without one the orientation is
    /// cleared.
    pub fn look_at_point(&mut self, location: LatLng) {
        let Some(position) = self.position.get() else {
            log::debug!("look_at_point without a camera position");
            self.orientation = None;
            return;
        };
        let target = to_mercator(location, 0.0, &self.projection);
        let (pitch, bearing) = pitch_bearing_towards(target - position);
        self.orientation = Some(orientation_from_pitch_bearing(pitch, bearing));
    }
}

impl<P: ProjectionScale> Camera<P> {
    /// Applies whichever of position and orientation `options` carries.
    pub fn apply_free_camera_options<Q>(
        &mut self,
        options: &FreeCameraOptions<Q>,
    ) {
        log::debug!(
            "applying free camera options position={:?} orientation={:?}",
            options.position,
            options.orientation
        );
        if let Some(position) = options.position.get() {
            self.set_position(position);
        }
        if let Some(orientation) = options.orientation {
            self.set_orientation_quaternion(orientation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn unset_position_resolves_to_default() {
        let opts = FreeCameraOptions::new();
        assert_eq!(opts.position, MercatorPosition::Unset);
        assert_eq!(opts.position.resolve(), DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(opts.position.get(), None);
    }

    #[test]
    fn location_of_unset_position_is_north_west_corner() {
        let (location, altitude) = FreeCameraOptions::new().location();
        assert!((location.longitude + 180.0).abs() < EPS);
        assert!((location.latitude - 85.051_128_779_806_6).abs() < 1e-9);
        assert!(altitude > 0.0);
    }

    #[test]
    fn set_location_round_trips() {
        let mut opts = FreeCameraOptions::new();
        let sf = LatLng::new(37.7749, -122.4194);
        opts.set_location(sf, 1500.0);

        let (location, altitude) = opts.location();
        assert!((location.latitude - sf.latitude).abs() < EPS);
        assert!((location.longitude - sf.longitude).abs() < EPS);
        assert!((altitude - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn set_location_stores_mercator_position() {
        let mut opts = FreeCameraOptions::new();
        opts.set_location(LatLng::new(0.0, 0.0), 0.0);
        assert_eq!(opts.position, MercatorPosition::At(DVec3::new(0.5, 0.5, 0.0)));
    }

    #[test]
    fn pitch_bearing_in_degrees_matches_camera() {
        let mut opts = FreeCameraOptions::new();
        opts.set_pitch_bearing(45.0, 30.0);

        let mut camera = Camera::new();
        camera.apply_free_camera_options(&opts);
        let (pitch, bearing) = camera.pitch_bearing();
        assert!((pitch - 45_f64.to_radians()).abs() < EPS);
        assert!((bearing - 30_f64.to_radians()).abs() < EPS);
    }

    #[test]
    fn look_at_without_position_clears_orientation() {
        let mut opts = FreeCameraOptions::new();
        opts.set_pitch_bearing(10.0, 10.0);
        opts.look_at_point(LatLng::new(1.0, 2.0));
        assert_eq!(opts.orientation, None);
    }

    #[test]
    fn look_at_agrees_with_camera_look_at() {
        let mut opts = FreeCameraOptions::new();
        opts.set_location(LatLng::new(47.6, -122.3), 800.0);
        let target = LatLng::new(47.62, -122.35);
        opts.look_at_point(target);

        let mut camera = Camera::new();
        camera.set_position(opts.position.resolve());
        camera.look_at_point(target);
        assert_eq!(opts.orientation, Some(camera.orientation()));
    }

    #[test]
    fn apply_sets_only_what_is_present() {
        let mut camera = Camera::new();
        camera.set_orientation(0.5, 0.5);
        let orientation = camera.orientation();

        let mut opts = FreeCameraOptions::new();
        opts.set_location(LatLng::new(-10.0, 20.0), 100.0);
        camera.apply_free_camera_options(&opts);
        assert_eq!(camera.orientation(), orientation);
        assert_eq!(camera.position(), opts.position.resolve());

        let position = camera.position();
        let mut turn = FreeCameraOptions::new();
        turn.set_pitch_bearing(20.0, -40.0);
        camera.apply_free_camera_options(&turn);
        assert_eq!(camera.position(), position);
        assert_eq!(Some(camera.orientation()), turn.orientation);
    }

    #[test]
    fn custom_projection_is_used_for_conversion() {
        let mut opts = FreeCameraOptions::with_projection(WebMercator::new(256.0));
        opts.set_location(LatLng::new(12.0, 34.0), 42.0);
        let (_, altitude) = opts.location();
        assert!((altitude - 42.0).abs() < 1e-9);
    }

    #[test]
    fn placement_builders_evaluate_in_constants() {
        const PLACED: MercatorPosition =
            MercatorPosition::At(DVec3::new(0.25, 0.5, 1e-6));
        const RESOLVED: DVec3 = PLACED.resolve();
        const UNSET: Option<DVec3> = MercatorPosition::Unset.get();
        const OPTS: FreeCameraOptions =
            FreeCameraOptions::with_projection(WebMercator::new(512.0));
        const CAMERA: Camera = Camera::with_projection(WebMercator::new(256.0));

        assert_eq!(RESOLVED, DVec3::new(0.25, 0.5, 1e-6));
        assert_eq!(UNSET, None);
        assert_eq!(OPTS, FreeCameraOptions::new());
        assert_eq!(CAMERA.projection().tile_size, 256.0);
        assert_eq!(CAMERA.position(), DVec3::ZERO);
    }
}
