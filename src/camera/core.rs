//! Map camera state and per-frame matrix builders.
//!
//! The camera's position lives in mercator space: x and y on the unit square
//! at the zoom 0 world size, z in the same normalized units (see
//! [`crate::projection::to_mercator`]). The camera looks down its local −Z
//! axis, and mercator Y points south.

use glam::{DMat4, DVec3};

use crate::geo::LatLng;
use crate::math::{matrix, Quaternion};
use crate::projection::scale::DEFAULT_TILE_SIZE;
use crate::projection::{
    lat_from_mercator_y, to_mercator, ProjectionScale, WebMercator,
};

/// Rotation for a pitch (tilt from straight down) and bearing (heading), both
/// in radians.
///
/// Both angles are negated so that positive values rotate clockwise around
/// their axis.
#[must_use]
pub fn orientation_from_pitch_bearing(pitch: f64, bearing: f64) -> Quaternion {
    let rot_bearing = Quaternion::from_euler_angles(0.0, 0.0, -bearing);
    let rot_pitch = Quaternion::from_euler_angles(-pitch, 0.0, 0.0);
    rot_bearing.multiply(rot_pitch)
}

/// Pitch and bearing in radians that point the camera along `delta`.
///
/// A zero `delta` is not special-cased: `atan2(+0, −0)` puts the pitch at
/// `π` and the bearing at `−π/2`.
pub(crate) fn pitch_bearing_towards(delta: DVec3) -> (f64, f64) {
    let bearing =
        (-delta.y).atan2(delta.x) - std::f64::consts::FRAC_PI_2;
    let pitch = delta.x.hypot(delta.y).atan2(-delta.z);
    (pitch, bearing)
}

/// Camera transform for `orientation` translated to `position`.
fn camera_transform(orientation: Quaternion, position: DVec3) -> DMat4 {
    matrix::with_translation(orientation.to_rotation_matrix(), position)
}

/// Position and orientation of the map camera.
///
/// `transform`'s rotation block always equals
/// `orientation.to_rotation_matrix()`; every mutator rebuilds both together.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera<P = WebMercator> {
    orientation: Quaternion,
    transform: DMat4,
    projection: P,
}

impl Camera {
    /// Camera at the mercator origin with identity orientation, using the
    /// default Web Mercator projection.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_projection(WebMercator::new(DEFAULT_TILE_SIZE))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProjectionScale> Camera<P> {
    /// Camera with identity orientation and transform backed by `projection`.
    #[must_use]
    pub const fn with_projection(projection: P) -> Self {
        Self {
            orientation: Quaternion::IDENTITY,
            transform: DMat4::IDENTITY,
            projection,
        }
    }

    /// Projection scale helper this camera uses.
    #[must_use]
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// Mercator-space position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> DVec3 {
        matrix::translation(&self.transform)
    }

    /// Combined rotation and mercator translation.
    #[inline]
    #[must_use]
    pub const fn transform(&self) -> DMat4 {
        self.transform
    }

    /// Current orientation.
    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Matrix from world pixel coordinates at `zoom` (heights in meters) to
    /// camera space.
    ///
    /// The chain is `flip · camera⁻¹ · z_scale`: heights are scaled to pixels,
    /// moved into camera space, and Y is flipped unless `flipped_y` is set.
    #[must_use]
    pub fn world_to_camera(&self, zoom: f64, flipped_y: bool) -> DMat4 {
        let scale = zoom.exp2();
        let world_size = self.projection.world_size(scale);
        let latitude = lat_from_mercator_y(self.transform.w_axis.y);
        let pixels_per_meter = 1.0
            / self
                .projection
                .meters_per_pixel_at_latitude(latitude, zoom);

        // Position is stored in mercator units; scale it to pixels.
        let camera = matrix::with_translation(
            self.transform,
            self.position() * world_size,
        );

        let flip = DMat4::from_scale(DVec3::new(
            1.0,
            if flipped_y { 1.0 } else { -1.0 },
            1.0,
        ));
        let z_scale =
            DMat4::from_scale(DVec3::new(1.0, 1.0, pixels_per_meter));

        flip * camera.inverse() * z_scale
    }

    /// Inverse of [`Camera::world_to_camera`].
    #[must_use]
    pub fn camera_to_world(&self, zoom: f64, flipped_y: bool) -> DMat4 {
        self.world_to_camera(zoom, flipped_y).inverse()
    }

    /// OpenGL-style right-handed perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn camera_to_clip_perspective(
        &self,
        fovy: f64,
        aspect_ratio: f64,
        near_z: f64,
        far_z: f64,
    ) -> DMat4 {
        DMat4::perspective_rh_gl(fovy, aspect_ratio, near_z, far_z)
    }

    /// Viewing direction: the camera's local −Z axis in mercator space.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        -self.transform.z_axis.truncate()
    }

    /// The camera's local X axis in mercator space.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.transform.x_axis.truncate()
    }

    /// The camera's up direction in mercator space.
    ///
    /// Negated local Y, since mercator Y points south.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        -self.transform.y_axis.truncate()
    }

    /// Orients the camera towards `location` at sea level.
    ///
    /// Looking at the camera's own position is not an error; it yields the
    /// orientation for pitch `π` and bearing `−π/2`.
    pub fn look_at_point(&mut self, location: LatLng) {
        let target = to_mercator(location, 0.0, &self.projection);
        let delta = target - self.position();
        if delta == DVec3::ZERO {
            log::debug!(
                "look-at target {location:?} coincides with camera position"
            );
        }

        let (pitch, bearing) = pitch_bearing_towards(delta);
        self.set_orientation(pitch, bearing);
    }

    /// Pitch and bearing in radians, in that order.
    #[must_use]
    pub fn pitch_bearing(&self) -> (f64, f64) {
        let f = self.forward();
        let r = self.right();

        let bearing = (-r.y).atan2(r.x);
        let pitch = f.x.hypot(f.y).atan2(-f.z);
        (pitch, bearing)
    }

    /// Sets the orientation from pitch and bearing in radians, keeping the
    /// position.
    pub fn set_orientation(&mut self, pitch: f64, bearing: f64) {
        log::trace!("set_orientation pitch={pitch} bearing={bearing}");
        self.set_orientation_quaternion(orientation_from_pitch_bearing(
            pitch, bearing,
        ));
    }

    /// Replaces the orientation, keeping the position.
    ///
    /// `orientation` must be unit length.
    pub fn set_orientation_quaternion(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
        self.transform = camera_transform(orientation, self.position());
    }

    /// Moves the camera to `mercator_position`, keeping the orientation.
    pub fn set_position(&mut self, mercator_position: DVec3) {
        log::trace!("set_position {mercator_position:?}");
        self.transform = camera_transform(self.orientation, mercator_position);
    }
}
