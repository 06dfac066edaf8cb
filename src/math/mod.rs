//! Rotation and matrix helpers layered on top of glam's `f64` types.

/// Bounds-checked column access for column-major 4x4 matrices.
pub mod matrix;
/// Unit quaternion used for camera orientation.
pub mod quaternion;

pub use quaternion::Quaternion;
