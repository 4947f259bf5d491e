//! Axis-aligned view volume and its Cohen-Sutherland clipper.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{ClipOutcome, SegmentClipper};
use crate::error::{Error, Result};
use crate::math::{Axis, Vec3};

/// Box bounded by `min` and `max` on every axis, boundaries included.
///
/// z bounds act as the near and far planes. Deserializing goes through the
/// same checks as [`ViewVolume::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewVolume")]
pub struct ViewVolume {
    min: Vec3,
    max: Vec3,
}

/// Unchecked bounds as they appear in a document.
#[derive(Deserialize)]
struct RawViewVolume {
    min: Vec3,
    max: Vec3,
}

impl TryFrom<RawViewVolume> for ViewVolume {
    type Error = Error;

    fn try_from(raw: RawViewVolume) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl ViewVolume {
    /// Creates a volume, rejecting non-finite bounds and `min > max` on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        let volume = Self { min, max };
        volume.validate()?;
        Ok(volume)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let (min, max) = (self.min[axis], self.max[axis]);
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(Error::InvalidVolume { axis, min, max });
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: Vec3) -> bool {
        OutCode::from_distances(&self.distances(p)).is_empty()
    }

    /// Signed distance of `p` to each bounding plane, positive inside.
    ///
    /// Order: left, right, bottom, top, near, far.
    fn distances(&self, p: Vec3) -> [f64; 6] {
        [
            p.x - self.min.x,
            self.max.x - p.x,
            p.y - self.min.y,
            self.max.y - p.y,
            p.z - self.min.z,
            self.max.z - p.z,
        ]
    }
}

/// The unit cube `[-1, 1]` on every axis.
impl Default for ViewVolume {
    fn default() -> Self {
        Self {
            min: Vec3::new(-1.0, -1.0, -1.0),
            max: Vec3::ONE,
        }
    }
}

bitflags! {
    /// One bit per bounding plane the point lies outside of.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct OutCode: u8 {
        const LEFT   = 0b000001;
        const RIGHT  = 0b000010;
        const BOTTOM = 0b000100;
        const TOP    = 0b001000;
        const NEAR   = 0b010000;
        const FAR    = 0b100000;
    }
}

impl OutCode {
    const fn for_plane(i: usize) -> Self {
        Self::from_bits_retain(1 << i)
    }

    fn from_distances(distances: &[f64; 6]) -> Self {
        let mut code = Self::empty();
        for (i, d) in distances.iter().enumerate() {
            if *d < 0.0 {
                code |= Self::for_plane(i);
            }
        }
        code
    }
}

/// Clips segments against a [`ViewVolume`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipEngine {
    volume: ViewVolume,
}

impl ClipEngine {
    pub fn new(volume: ViewVolume) -> Self {
        Self { volume }
    }

    pub fn volume(&self) -> &ViewVolume {
        &self.volume
    }
}

impl SegmentClipper for ClipEngine {
    fn check_clipping(&self, start: &mut Vec3, end: &mut Vec3) -> ClipOutcome {
        let d0 = self.volume.distances(*start);
        let d1 = self.volume.distances(*end);
        let out0 = OutCode::from_distances(&d0);
        let out1 = OutCode::from_distances(&d1);
        let either = out0 | out1;

        if either.is_empty() {
            log::trace!("segment {start:?} -> {end:?} inside");
            return ClipOutcome::BothIn;
        }
        if out0.intersects(out1) {
            log::trace!("segment {start:?} -> {end:?} outside ({either:?})");
            return ClipOutcome::BothOut;
        }

        // Parameter range along start->end that survives every plane.
        let mut alphas = [0.0, 1.0];
        for plane in 0..6 {
            let code = OutCode::for_plane(plane);
            if !either.contains(code) {
                continue;
            }

            let (a, b) = (d0[plane], d1[plane]);
            let alpha = a / (a - b);
            if out0.contains(code) {
                alphas[0] = f64::max(alphas[0], alpha);
            } else {
                alphas[1] = f64::min(alphas[1], alpha);
            }

            // Crosses different outside regions without entering the volume.
            if alphas[0] > alphas[1] {
                log::trace!("segment {start:?} -> {end:?} misses the volume");
                return ClipOutcome::BothOut;
            }
        }

        let (s, e) = (*start, *end);
        if !out0.is_empty() {
            *start = s + (e - s) * alphas[0];
        }
        if !out1.is_empty() {
            *end = s + (e - s) * alphas[1];
        }
        log::trace!("segment clipped to {start:?} -> {end:?}");
        ClipOutcome::Clipped
    }
}
