//! Map camera: mercator-space position and orientation, and the matrices a
//! renderer needs to draw geographic content from that viewpoint.

/// Camera state, matrix builders and orientation solvers.
pub mod core;
/// Geographic placement options applied to a camera.
pub mod free;
/// Per-frame matrix bundle and its GPU uniform packing.
pub mod uniform;

pub use self::core::{orientation_from_pitch_bearing, Camera};
pub use free::{FreeCameraOptions, MercatorPosition};
pub use uniform::{CameraUniform, FrameMatrices};
