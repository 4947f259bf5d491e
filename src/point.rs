//! The 3D point handed in by callers when building faces.

use crate::math::Vec3;

/// Handle naming the face vertex that was built from a [`Point3`].
///
/// This is a one-way association: the point can ask the owning face for the
/// vertex via [`Face::vertex`](crate::Face::vertex), while the face keeps
/// no reference back to the point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexLink {
    index: usize,
}

impl VertexLink {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A model-space location supplied by the charting layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    link: Option<VertexLink>,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            link: None,
        }
    }

    /// Records which face vertex now represents this point.
    pub fn link_to_vertex(&mut self, link: VertexLink) {
        self.link = Some(link);
    }

    pub fn linked_vertex(&self) -> Option<VertexLink> {
        self.link
    }
}

impl From<&Point3> for Vec3 {
    fn from(p: &Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}
