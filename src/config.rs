//! View parameters shared by a render pass.
//!
//! A [`ViewConfig`] is the single source of truth for the perspective
//! distance, the clipping volume and the 2D offset used when handing
//! projected points to the renderer.
//!
//! ```toml
//! perspective_distance = 800.0
//! x_offset = 20.0
//! y_offset = 40.0
//!
//! [volume]
//! min = { x = -500.0, y = -500.0, z = -1000.0 }
//! max = { x = 500.0, y = 500.0, z = 1000.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::clipper::{ClipEngine, ViewVolume};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Distance from the viewer to the `z = 0` plane.
    pub perspective_distance: f64,
    pub volume: ViewVolume,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            perspective_distance: 1000.0,
            volume: ViewVolume::default(),
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl ViewConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ViewConfig = toml::from_str(source)?;
        config.validate()?;
        log::debug!("loaded view config: {config:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let d = self.perspective_distance;
        if !d.is_finite() || d <= 0.0 {
            return Err(Error::InvalidDistance(d));
        }
        self.volume.validate()
    }

    pub fn clip_engine(&self) -> ClipEngine {
        ClipEngine::new(self.volume)
    }
}
