use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default vertical field of view in degrees (`0.6435011087932844` rad).
const DEFAULT_FOVY_DEGREES: f64 = 36.869_897_645_844_02;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Whether the screen Y axis runs the same way as mercator Y (south).
    #[schemars(title = "Flip Y")]
    pub flipped_y: bool,
}

impl CameraOptions {
    /// Vertical field of view in radians.
    #[inline]
    #[must_use]
    pub const fn fovy_radians(&self) -> f64 {
        self.fovy.to_radians()
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: DEFAULT_FOVY_DEGREES,
            znear: 0.1,
            zfar: 100_000.0,
            flipped_y: false,
        }
    }
}
