//! Segment clipping against a viewing volume.
//!
//! Faces clip edge by edge: every segment goes through a
//! [`SegmentClipper`], which reports one of three [`ClipOutcome`]s and
//! adjusts the endpoints in place when the segment straddles the boundary.
//!
//! - [`volume`]: the axis-aligned [`ViewVolume`] and the Cohen-Sutherland
//!   based [`ClipEngine`] that clips against it.

pub mod volume;

pub use volume::{ClipEngine, ViewVolume};

use crate::math::Vec3;

/// Result of clipping one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipOutcome {
    /// Both endpoints were already inside; nothing moved.
    BothIn,
    /// No part of the segment lies inside the volume.
    BothOut,
    /// One or both endpoints were moved onto the volume boundary.
    Clipped,
}

impl ClipOutcome {
    /// Whether any part of the segment survives.
    pub fn is_visible(self) -> bool {
        self != ClipOutcome::BothOut
    }
}

/// Clips a line segment against some viewing volume.
///
/// Implementors must leave `start` and `end` untouched for
/// [`ClipOutcome::BothIn`]; for [`ClipOutcome::Clipped`] they describe the
/// visible sub-segment on return. Their contents are unspecified after
/// [`ClipOutcome::BothOut`].
pub trait SegmentClipper {
    fn check_clipping(&self, start: &mut Vec3, end: &mut Vec3) -> ClipOutcome;
}

impl<T: SegmentClipper + ?Sized> SegmentClipper for &T {
    fn check_clipping(&self, start: &mut Vec3, end: &mut Vec3) -> ClipOutcome {
        (**self).check_clipping(start, end)
    }
}
