// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Map camera core: positions and orients the rendering camera of a map view
//! and derives the matrices that project geographic content onto the screen.
//!
//! Positions are kept in normalized Web Mercator space ("mercator space"),
//! where the world spans `[0, 1] x [0, 1]` with Y pointing south. Heights use
//! the same normalized units, so the stored camera state does not depend on
//! the zoom level; zoom only enters when per-frame matrices are built.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - camera state, matrix builders and look-at solving
//! - [`camera::FreeCameraOptions`] - geographic (lat/lng/meters) placement
//! - [`math::Quaternion`] - rotation type behind the camera orientation
//! - [`projection`] - mercator conversions and the [`ProjectionScale`] seam
//! - [`options::Options`] - TOML-backed camera and projection settings
//!
//! # Numerical boundaries
//!
//! Latitudes are not clamped. At or beyond ±90° the forward mercator
//! projection produces non-finite values, which propagate into every matrix
//! built from them. Callers are expected to keep latitudes within the
//! mercator band (±85.05°).
//!
//! [`ProjectionScale`]: projection::ProjectionScale

pub mod camera;
pub mod error;
pub mod geo;
pub mod math;
pub mod options;
pub mod projection;

pub use camera::{Camera, FreeCameraOptions};
pub use error::MapCamError;
pub use geo::LatLng;
pub use math::Quaternion;
