//! Per-frame camera matrices and their GPU-ready packing.

use glam::DMat4;

use super::core::Camera;
use crate::options::CameraOptions;
use crate::projection::ProjectionScale;

/// Matrices a renderer consumes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// World pixel space (heights in meters) to camera space.
    pub world_to_camera: DMat4,
    /// Inverse of `world_to_camera`.
    pub camera_to_world: DMat4,
    /// Camera space to clip space.
    pub camera_to_clip: DMat4,
}

impl FrameMatrices {
    /// World to clip in one matrix.
    #[must_use]
    pub fn world_to_clip(&self) -> DMat4 {
        self.camera_to_clip * self.world_to_camera
    }
}

impl<P: ProjectionScale> Camera<P> {
    /// Builds every matrix for a frame at `zoom` with viewport `aspect_ratio`.
    #[must_use]
    pub fn frame_matrices(
        &self,
        zoom: f64,
        aspect_ratio: f64,
        options: &CameraOptions,
    ) -> FrameMatrices {
        let world_to_camera = self.world_to_camera(zoom, options.flipped_y);
        FrameMatrices {
            world_to_camera,
            camera_to_world: world_to_camera.inverse(),
            camera_to_clip: self.camera_to_clip_perspective(
                options.fovy_radians(),
                aspect_ratio,
                options.znear,
                options.zfar,
            ),
        }
    }
}

/// Column-major identity for the uniform's `f32` matrices.
const IDENTITY_COLS: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the frame matrices and camera basis.
pub struct CameraUniform {
    /// Combined world-to-clip matrix.
    pub view_proj: [[f32; 4]; 4],
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera mercator-space position.
    pub position: [f32; 3],
    /// Zoom level the matrices were built for.
    pub zoom: f32,
    /// Camera forward direction in mercator space.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity matrices and the identity camera basis.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view_proj: IDENTITY_COLS,
            view: IDENTITY_COLS,
            proj: IDENTITY_COLS,
            position: [0.0; 3],
            zoom: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from a camera and its frame matrices.
    ///
    /// Values are narrowed to `f32`; translations in pixel space at high
    /// zoom lose precision here, not in the `f64` matrices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update<P: ProjectionScale>(
        &mut self,
        camera: &Camera<P>,
        zoom: f64,
        frame: &FrameMatrices,
    ) {
        self.view_proj = frame.world_to_clip().as_mat4().to_cols_array_2d();
        self.view = frame.world_to_camera.as_mat4().to_cols_array_2d();
        self.proj = frame.camera_to_clip.as_mat4().to_cols_array_2d();
        self.position = camera.position().as_vec3().to_array();
        self.zoom = zoom as f32;
        self.forward = camera.forward().as_vec3().to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec3, Mat4};

    use super::*;

    #[test]
    fn uniform_layout_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 3 * 64 + 32);
        let uniform = CameraUniform::new();
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 224);
        assert_eq!(uniform.view, Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn frame_matrices_follow_options() {
        let mut camera = Camera::new();
        camera.set_position(DVec3::new(0.5, 0.4, 1e-5));
        camera.set_orientation(0.5, 0.2);
        let options = CameraOptions {
            flipped_y: true,
            ..CameraOptions::default()
        };

        let frame = camera.frame_matrices(6.0, 1.5, &options);
        assert_eq!(frame.world_to_camera, camera.world_to_camera(6.0, true));
        assert_eq!(frame.camera_to_world, camera.camera_to_world(6.0, true));
        assert_eq!(
            frame.camera_to_clip,
            camera.camera_to_clip_perspective(
                options.fovy_radians(),
                1.5,
                options.znear,
                options.zfar
            )
        );
        assert!((frame.world_to_camera * frame.camera_to_world)
            .abs_diff_eq(DMat4::IDENTITY, 1e-6));
    }

    #[test]
    fn update_copies_camera_state() {
        let mut camera = Camera::new();
        camera.set_position(DVec3::new(0.25, 0.75, 0.0));
        let frame = camera.frame_matrices(3.0, 1.0, &CameraOptions::default());

        let mut uniform = CameraUniform::default();
        uniform.update(&camera, 3.0, &frame);
        assert_eq!(uniform.position, [0.25, 0.75, 0.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.zoom, 3.0);
        assert_eq!(
            uniform.view_proj,
            frame.world_to_clip().as_mat4().to_cols_array_2d()
        );
    }
}
