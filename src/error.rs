//! Crate error type.

use thiserror::Error;

use crate::math::Axis;

/// Errors produced by the geometry kernel.
///
/// Missing derived quantities (a normal on a two-vertex face, a centroid on
/// an empty one) are reported as `None`, not through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector component was requested with an index outside 0..=2.
    #[error("axis index {0} is out of range (expected 0, 1 or 2)")]
    AxisOutOfRange(usize),

    /// A view volume bound is not finite, or its minimum exceeds its maximum.
    #[error("invalid view volume on {axis:?} axis: min {min} / max {max}")]
    InvalidVolume { axis: Axis, min: f64, max: f64 },

    /// Perspective distance must be finite and strictly positive.
    #[error("invalid perspective distance {0}")]
    InvalidDistance(f64),

    /// The view configuration could not be parsed.
    #[error("failed to parse view configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
