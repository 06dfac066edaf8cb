//! Column access for column-major `DMat4` storage.
//!
//! Column `i` occupies elements `[4i, 4i + 4)` of the flat array. The camera
//! itself goes through glam's named axes (`x_axis` .. `w_axis`); these helpers
//! serve callers that address columns by a runtime index.

use glam::{DMat4, DVec3, DVec4};

use crate::error::MapCamError;

/// Number of columns in a 4x4 matrix.
pub const COLUMNS: usize = 4;

/// Returns column `index` of `matrix`.
///
/// Indices outside `0..4` are a programming error: debug builds assert, and
/// release builds report [`MapCamError::ColumnOutOfRange`].
pub fn column(matrix: &DMat4, index: usize) -> Result<DVec4, MapCamError> {
    debug_assert!(index < COLUMNS, "matrix column {index} out of range");
    if index >= COLUMNS {
        return Err(MapCamError::ColumnOutOfRange { index });
    }
    let cols = matrix.to_cols_array();
    let start = index * COLUMNS;
    Ok(DVec4::from_slice(&cols[start..start + COLUMNS]))
}

/// Returns the translation (column 3, components 0..3) of `matrix`.
#[inline]
#[must_use]
pub const fn translation(matrix: &DMat4) -> DVec3 {
    let w = matrix.w_axis;
    DVec3::new(w.x, w.y, w.z)
}

/// Returns `matrix` with its translation xyz replaced by `translation`.
///
/// The homogeneous component of column 3 is left untouched.
#[inline]
#[must_use]
pub const fn with_translation(mut matrix: DMat4, translation: DVec3) -> DMat4 {
    matrix.w_axis =
        DVec4::new(translation.x, translation.y, translation.z, matrix.w_axis.w);
    matrix
}
