use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::projection::scale::{WebMercator, DEFAULT_TILE_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Map projection parameters.
pub struct ProjectionOptions {
    /// Tile edge length in pixels; the world is one tile wide at zoom 0.
    #[schemars(title = "Tile Size", range(min = 64.0, max = 1024.0), extend("step" = 64.0))]
    pub tile_size: f64,
}

impl ProjectionOptions {
    /// Web Mercator projection using these settings.
    #[must_use]
    pub const fn web_mercator(&self) -> WebMercator {
        WebMercator::new(self.tile_size)
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl From<&ProjectionOptions> for WebMercator {
    fn from(options: &ProjectionOptions) -> Self {
        options.web_mercator()
    }
}
