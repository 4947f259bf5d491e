//! A small 3D geometry kernel for painting charts back to front.
//!
//! Faces are flat polygons built from model-space points. They are moved
//! by [`Mat4`] transforms, frozen for depth sorting, compared pairwise to
//! find a paint order, perspective-projected, clipped against a view
//! volume and finally flattened to 2D points for a renderer.
//!
//! # Quick Start
//!
//! ```
//! use facet3d::prelude::*;
//!
//! let mut face = Face::from_vertices(vec![
//!     Vec3::new(0.0, 0.0, 0.5),
//!     Vec3::new(0.5, 0.0, 0.5),
//!     Vec3::new(0.0, 0.5, 0.5),
//! ]);
//! face.transform(&Mat4::rotation_z(0.1));
//! face.prepare_for_sort();
//! face.perspective(10.0);
//! face.clip(&ClipEngine::default());
//! let points = face.projected_points_2d(100.0, 100.0);
//! assert_eq!(points.len(), 6);
//! ```

pub mod clipper;
pub mod config;
pub mod error;
pub mod face;
pub mod math;
pub mod point;
pub mod sorting;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipEngine, ClipOutcome, SegmentClipper, ViewVolume};
pub use config::ViewConfig;
pub use error::{Error, Result};
pub use face::{Extrema, Face};
pub use point::{Point3, VertexLink};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use facet3d::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::face::{Extrema, Face};
    pub use crate::point::{Point3, VertexLink};

    // Clipping
    pub use crate::clipper::{ClipEngine, ClipOutcome, SegmentClipper, ViewVolume};

    // Sorting
    pub use crate::sorting::paint_order;

    // Config
    pub use crate::config::ViewConfig;

    // Math
    pub use crate::math::{Axis, Mat4, Vec2, Vec3};
}
