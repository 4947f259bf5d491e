//! Flat polygonal faces and the pairwise visibility test.
//!
//! A [`Face`] goes through a fixed pipeline:
//!
//! ```text
//! model points -> transform(s) -> prepare_for_sort -> is_in_front_of (pairwise)
//!              -> perspective -> clip -> projected_points_2d
//! ```
//!
//! Normal and centroid are derived lazily from the current vertices and
//! dropped whenever the vertices move, so they always describe the current
//! pose. [`Face::prepare_for_sort`] freezes a copy of the vertices together
//! with their normal and centroid; the visibility test only ever reads that
//! frozen copy.

use crate::clipper::SegmentClipper;
use crate::math::{Mat4, Vec2, Vec3};
use crate::point::{Point3, VertexLink};

/// Axis-aligned bounds of a face's vertices.
///
/// Recomputed only by [`Face::prepare_for_sort`]. On a face without
/// vertices the bounds come out inverted (`min = f64::MAX`,
/// `max = f64::MIN`); check [`Face::len`] before trusting them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extrema {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Extrema {
    const EMPTY: Self = Self {
        x_min: f64::MAX,
        x_max: f64::MIN,
        y_min: f64::MAX,
        y_max: f64::MIN,
        z_min: f64::MAX,
        z_max: f64::MIN,
    };

    fn of(vertices: &[Vec3]) -> Self {
        vertices.iter().fold(Self::EMPTY, |e, v| Self {
            x_min: e.x_min.min(v.x),
            x_max: e.x_max.max(v.x),
            y_min: e.y_min.min(v.y),
            y_max: e.y_max.max(v.y),
            z_min: e.z_min.min(v.z),
            z_max: e.z_max.max(v.z),
        })
    }

    /// True when some axis has `max < min`, i.e. the bounds describe no points.
    pub fn is_inverted(&self) -> bool {
        self.x_max < self.x_min || self.y_max < self.y_min || self.z_max < self.z_min
    }
}

/// Frozen view-space state captured by [`Face::prepare_for_sort`].
#[derive(Clone, Debug, PartialEq)]
struct ViewSnapshot {
    vertices: Vec<Vec3>,
    normal: Option<Vec3>,
    centroid: Option<Vec3>,
}

/// The plane a face contributes to a visibility test.
struct DividingPlane<'a> {
    normal: Vec3,
    reference: Vec3,
    centroid: Vec3,
    test_points: &'a [Vec3],
}

/// A flat polygon in 3D.
///
/// Vertex order is significant: consecutive vertices form edges, and with
/// three or more vertices the last one closes back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    vertices: Vec<Vec3>,
    view: Option<ViewSnapshot>,
    centroid: Option<Vec3>,
    normal: Option<Vec3>,
    extrema: Extrema,
}

impl Face {
    /// A face with `n` zeroed vertices, to be filled in through
    /// [`vertices_mut`](Self::vertices_mut).
    pub fn with_len(n: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; n],
            ..Self::default()
        }
    }

    /// A single-vertex face.
    pub fn from_point(point: &Point3) -> Self {
        Self::from_vertices(vec![Vec3::from(point)])
    }

    /// Builds a face from `points`, linking each point to the vertex made
    /// from it.
    pub fn from_points(points: &mut [Point3]) -> Self {
        let vertices = points
            .iter_mut()
            .enumerate()
            .map(|(i, p)| {
                p.link_to_vertex(VertexLink::new(i));
                Vec3::from(&*p)
            })
            .collect();
        Self::from_vertices(vertices)
    }

    pub fn from_vertices(vertices: Vec<Vec3>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    /// Copy of `original`, or an empty face when there is none.
    ///
    /// Cached normal, centroid and extrema are carried over as they are,
    /// not recomputed. The view snapshot is not: the copy has to be
    /// prepared for sorting on its own.
    pub fn copy_of(original: Option<&Face>) -> Self {
        match original {
            Some(face) => Self {
                vertices: face.vertices.clone(),
                view: None,
                centroid: face.centroid,
                normal: face.normal,
                extrema: face.extrema,
            },
            None => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Mutable access to the vertices. Drops the cached normal and centroid.
    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        self.clear_derived();
        &mut self.vertices
    }

    /// Vertex built from a point passed to [`from_points`](Self::from_points).
    ///
    /// `None` once the vertex list no longer reaches that index (after a
    /// clip dropped edges, or a reset).
    pub fn vertex(&self, link: VertexLink) -> Option<&Vec3> {
        self.vertices.get(link.index())
    }

    /// The vertices frozen by the last [`prepare_for_sort`](Self::prepare_for_sort).
    pub fn view_vertices(&self) -> &[Vec3] {
        match &self.view {
            Some(view) => &view.vertices,
            None => &[],
        }
    }

    /// The current vertices as fresh, unlinked points.
    pub fn to_points(&self) -> Vec<Point3> {
        self.vertices.iter().map(|v| Point3::from(*v)).collect()
    }

    /// `(v1 - v0) x (v2 - v1)`, or `None` below three vertices.
    ///
    /// Collinear or coincident leading vertices give the zero vector; see
    /// [`is_degenerate`](Self::is_degenerate).
    pub fn normal(&mut self) -> Option<Vec3> {
        if self.normal.is_none() {
            self.normal = Self::compute_normal(&self.vertices);
        }
        self.normal
    }

    /// Arithmetic mean of the vertices, or `None` for an empty face.
    pub fn centroid(&mut self) -> Option<Vec3> {
        if self.centroid.is_none() {
            self.centroid = Self::compute_centroid(&self.vertices);
        }
        self.centroid
    }

    /// True when the first three vertices do not span a plane.
    pub fn is_degenerate(&mut self) -> bool {
        self.normal().map_or(true, |n| n.is_zero())
    }

    fn compute_normal(vertices: &[Vec3]) -> Option<Vec3> {
        match vertices {
            [v0, v1, v2, ..] => Some((*v1 - *v0).cross(*v2 - *v1)),
            _ => None,
        }
    }

    fn compute_centroid(vertices: &[Vec3]) -> Option<Vec3> {
        if vertices.is_empty() {
            return None;
        }
        let sum = vertices.iter().fold(Vec3::ZERO, |acc, v| acc + *v);
        Some(sum / vertices.len() as f64)
    }

    /// Bounds captured by the last [`prepare_for_sort`](Self::prepare_for_sort).
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// Applies `matrix` to every vertex.
    pub fn transform(&mut self, matrix: &Mat4) {
        for v in &mut self.vertices {
            v.multiply(matrix);
        }
        self.clear_derived();
    }

    /// Perspective-divides every vertex. Extrema keep their pre-projection values.
    pub fn perspective(&mut self, distance: f64) {
        for v in &mut self.vertices {
            v.perspective(distance);
        }
        self.clear_derived();
    }

    /// Freezes the current pose for visibility tests.
    ///
    /// Recomputes the extrema, derives normal and centroid, and snapshots
    /// the vertices. Call after all positioning transforms and before any
    /// [`is_in_front_of`](Self::is_in_front_of).
    pub fn prepare_for_sort(&mut self) {
        self.extrema = Extrema::of(&self.vertices);
        let normal = self.normal();
        let centroid = self.centroid();
        self.view = Some(ViewSnapshot {
            vertices: self.vertices.clone(),
            normal,
            centroid,
        });
        log::debug!(
            "prepared face with {} vertices, z in [{}, {}]",
            self.vertices.len(),
            self.extrema.z_min,
            self.extrema.z_max
        );
    }

    /// Replaces the vertices with their clipped counterparts.
    ///
    /// One vertex is clipped as a zero-length segment and two as a single
    /// segment. Three or more are clipped edge by edge, closing edge
    /// included, and every surviving edge contributes both endpoints in edge
    /// order. Shared corners therefore appear twice: the result is a point
    /// list for drawing, not a minimal polygon.
    pub fn clip<C: SegmentClipper + ?Sized>(&mut self, clipper: &C) {
        let before = self.vertices.len();
        let clipped = match self.vertices.as_slice() {
            [] => Vec::new(),
            [only] => {
                let (mut start, mut end) = (*only, *only);
                if clipper.check_clipping(&mut start, &mut end).is_visible() {
                    vec![start]
                } else {
                    Vec::new()
                }
            }
            [a, b] => {
                let (mut start, mut end) = (*a, *b);
                if clipper.check_clipping(&mut start, &mut end).is_visible() {
                    vec![start, end]
                } else {
                    Vec::new()
                }
            }
            vertices => {
                let n = vertices.len();
                let mut kept = Vec::with_capacity(n * 2);
                for i in 0..n {
                    let (mut start, mut end) = (vertices[i], vertices[(i + 1) % n]);
                    if clipper.check_clipping(&mut start, &mut end).is_visible() {
                        kept.push(start);
                        kept.push(end);
                    }
                }
                kept
            }
        };

        log::debug!("clipped face from {} to {} vertices", before, clipped.len());
        self.vertices = clipped;
        self.clear_derived();
    }

    /// Whether `self` occludes `other` when painting back to front.
    ///
    /// The face with at least three view vertices supplies a plane (its
    /// normal and first view vertex); the other face's view vertices are
    /// tested against it. `self` is tried first; if only `other` can supply
    /// the plane the roles swap and `treat_self_as_outside` is inverted.
    /// The plane normal is oriented with respect to the plane face's
    /// centroid: away from it when `treat_self_as_outside`, toward it
    /// otherwise. The answer is true when every test point lies strictly on
    /// the positive side.
    ///
    /// If neither face has three view vertices there is nothing to compare
    /// and the answer is true. Only meaningful for convex faces that do not
    /// intersect; the relation is not transitive in general.
    pub fn is_in_front_of(&self, other: &Face, treat_self_as_outside: bool) -> bool {
        if self.view.is_none() || other.view.is_none() {
            log::warn!("visibility test on a face that was never prepared for sorting");
        }

        let (plane, outside) = match self.dividing_plane(other) {
            Some(plane) => (plane, treat_self_as_outside),
            None => match other.dividing_plane(self) {
                Some(plane) => (plane, !treat_self_as_outside),
                None => return true,
            },
        };

        let mut normal = plane.normal;
        let facing = normal.dot(plane.centroid);
        if (outside && facing <= 0.0) || (!outside && facing >= 0.0) {
            normal.negate();
        }

        let offset = -normal.dot(plane.reference);
        plane
            .test_points
            .iter()
            .all(|p| p.dot(normal) + offset > 0.0)
    }

    /// The plane `self` defines for testing `other`, if `self` has at least
    /// three view vertices.
    fn dividing_plane<'a>(&'a self, other: &'a Face) -> Option<DividingPlane<'a>> {
        let view = self.view.as_ref().filter(|v| v.vertices.len() >= 3)?;
        Some(DividingPlane {
            normal: view.normal?,
            reference: view.vertices[0],
            centroid: view.centroid?,
            test_points: other.view_vertices(),
        })
    }

    /// Flattens the vertices to `(x + x_offset, y + y_offset)`, dropping z.
    pub fn projected_points_2d(&self, x_offset: f64, y_offset: f64) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|v| Vec2::new(v.x + x_offset, v.y + y_offset))
            .collect()
    }

    /// Drops the vertices, normal and centroid and zeroes the z extrema.
    ///
    /// x and y extrema and the view snapshot are left as they were. The
    /// face is an empty shell afterwards; use
    /// [`clear_derived`](Self::clear_derived) to only forget cached geometry.
    pub fn reset(&mut self) {
        self.vertices = Vec::new();
        self.clear_derived();
        self.extrema.z_min = 0.0;
        self.extrema.z_max = 0.0;
    }

    /// Forgets the cached normal and centroid; they are re-derived on next access.
    pub fn clear_derived(&mut self) {
        self.normal = None;
        self.centroid = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::{ClipEngine, ClipOutcome, ViewVolume};
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::f64::consts::FRAC_PI_2;

    fn triangle() -> Face {
        Face::from_vertices(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
    }

    /// Unit square in the plane `z = depth`.
    fn square_at(depth: f64) -> Face {
        let mut face = Face::from_vertices(vec![
            Vec3::new(0.0, 0.0, depth),
            Vec3::new(1.0, 0.0, depth),
            Vec3::new(1.0, 1.0, depth),
            Vec3::new(0.0, 1.0, depth),
        ]);
        face.prepare_for_sort();
        face
    }

    /// Clipper that records calls and answers from a script.
    struct Scripted {
        outcomes: RefCell<Vec<ClipOutcome>>,
        seen: RefCell<Vec<(Vec3, Vec3)>>,
    }

    impl Scripted {
        fn new(outcomes: &[ClipOutcome]) -> Self {
            let mut outcomes = outcomes.to_vec();
            outcomes.reverse();
            Self {
                outcomes: RefCell::new(outcomes),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SegmentClipper for Scripted {
        fn check_clipping(&self, start: &mut Vec3, end: &mut Vec3) -> ClipOutcome {
            self.seen.borrow_mut().push((*start, *end));
            self.outcomes.borrow_mut().pop().unwrap_or(ClipOutcome::BothIn)
        }
    }

    #[test]
    fn triangle_normal_and_centroid() {
        let mut face = triangle();
        assert_eq!(face.normal(), Some(Vec3::new(0.0, 0.0, 1.0)));

        let c = face.centroid().unwrap();
        assert_relative_eq!(c.x, 1.0 / 3.0);
        assert_relative_eq!(c.y, 1.0 / 3.0);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn normal_uses_first_two_edges() {
        let p = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, -1.0, 0.5),
            Vec3::new(-2.0, 0.0, 7.0),
        ];
        let mut face = Face::from_vertices(p.to_vec());
        assert_eq!(face.normal(), Some((p[1] - p[0]).cross(p[2] - p[1])));
    }

    #[test]
    fn collinear_normal_is_zero() {
        let mut face = Face::from_vertices(vec![Vec3::ZERO, Vec3::ONE, Vec3::ONE * 2.0]);
        assert_eq!(face.normal(), Some(Vec3::ZERO));
        assert!(face.is_degenerate());
        assert!(!triangle().is_degenerate());
    }

    #[test]
    fn short_faces_have_no_normal() {
        let mut face = Face::from_vertices(vec![Vec3::ZERO, Vec3::ONE]);
        assert_eq!(face.normal(), None);
        assert!(face.centroid().is_some());

        let mut empty = Face::default();
        assert_eq!(empty.normal(), None);
        assert_eq!(empty.centroid(), None);
    }

    #[test]
    fn with_len_allocates_zeroed_slots() {
        let mut face = Face::with_len(3);
        assert_eq!(face.vertices(), &[Vec3::ZERO; 3]);
        face.vertices_mut()[1] = Vec3::RIGHT;
        face.vertices_mut()[2] = Vec3::UP;
        assert_eq!(face.normal(), Some(Vec3::FORWARD));
    }

    #[test]
    fn from_points_links_each_point() {
        let mut points = vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
        ];
        let mut face = Face::from_points(&mut points);

        let link = points[1].linked_vertex().unwrap();
        assert_eq!(link.index(), 1);
        assert_eq!(face.vertex(link), Some(&Vec3::new(4.0, 5.0, 6.0)));

        face.transform(&Mat4::translation(1.0, 0.0, 0.0));
        assert_eq!(face.vertex(link), Some(&Vec3::new(5.0, 5.0, 6.0)));

        // the caller's point itself is untouched
        assert_eq!(points[1].x, 4.0);
    }

    #[test]
    fn from_point_copies_location() {
        let face = Face::from_point(&Point3::new(1.0, 1.0, 1.0));
        assert_eq!(face.vertices(), &[Vec3::ONE]);
    }

    #[test]
    fn copy_carries_cached_state() {
        let mut original = triangle();
        original.prepare_for_sort();

        let mut copy = Face::copy_of(Some(&original));
        assert_eq!(copy.vertices(), original.vertices());
        assert_eq!(copy.extrema(), original.extrema());
        assert_eq!(copy.normal(), original.normal());
        assert_eq!(copy.centroid(), original.centroid());

        let empty = Face::copy_of(None);
        assert!(empty.is_empty());
        assert!(empty.view_vertices().is_empty());
    }

    #[test]
    fn copy_needs_its_own_sort_preparation() {
        let mut original = triangle();
        original.prepare_for_sort();

        let mut copy = Face::copy_of(Some(&original));
        assert!(copy.view_vertices().is_empty());

        copy.prepare_for_sort();
        assert_eq!(copy.view_vertices(), original.view_vertices());
    }

    #[test]
    fn transform_after_cache_matches_transformed_cache() {
        let rotation = Mat4::rotation_x(FRAC_PI_2);

        let mut cached = triangle();
        let normal_before = cached.normal().unwrap();
        let centroid_before = cached.centroid().unwrap();
        cached.transform(&rotation);

        let expected_normal = rotation * normal_before;
        let expected_centroid = rotation * centroid_before;
        let n = cached.normal().unwrap();
        let c = cached.centroid().unwrap();
        assert_relative_eq!(n.y, expected_normal.y, epsilon = 1e-12);
        assert_relative_eq!(n.z, expected_normal.z, epsilon = 1e-12);
        assert_relative_eq!(c.y, expected_centroid.y, epsilon = 1e-12);
        assert_relative_eq!(c.z, expected_centroid.z, epsilon = 1e-12);

        // lazily derived after the transform gives the same answer
        let mut lazy = triangle();
        lazy.transform(&rotation);
        assert_eq!(lazy.normal(), Some(n));
        assert_eq!(lazy.centroid(), Some(c));
    }

    #[test]
    fn translation_moves_centroid_not_normal() {
        let mut face = triangle();
        let normal = face.normal();
        face.centroid();
        face.transform(&Mat4::translation(0.0, 0.0, 5.0));

        assert_eq!(face.normal(), normal);
        assert_relative_eq!(face.centroid().unwrap().z, 5.0);
    }

    #[test]
    fn perspective_projects_vertices_and_keeps_extrema() {
        let mut face = Face::from_vertices(vec![
            Vec3::new(2.0, 2.0, 10.0),
            Vec3::new(4.0, 0.0, 10.0),
            Vec3::new(0.0, 4.0, 10.0),
        ]);
        face.prepare_for_sort();
        let extrema = face.extrema();

        face.perspective(10.0);
        assert_eq!(face.vertices()[0], Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(face.extrema(), extrema);
        assert_relative_eq!(face.centroid().unwrap().x, 1.0);
    }

    #[test]
    fn prepare_records_extrema_and_snapshot() {
        let mut face = Face::from_vertices(vec![
            Vec3::new(-1.0, 2.0, 3.0),
            Vec3::new(4.0, -5.0, 6.0),
            Vec3::new(0.0, 0.0, -7.0),
        ]);
        face.prepare_for_sort();

        let e = face.extrema();
        assert_eq!((e.x_min, e.x_max), (-1.0, 4.0));
        assert_eq!((e.y_min, e.y_max), (-5.0, 2.0));
        assert_eq!((e.z_min, e.z_max), (-7.0, 6.0));
        assert_eq!(face.view_vertices(), face.vertices());

        face.transform(&Mat4::translation(1.0, 1.0, 1.0));
        assert_eq!(face.view_vertices()[0], Vec3::new(-1.0, 2.0, 3.0));
    }

    #[test]
    fn empty_face_extrema_are_inverted() {
        let mut face = Face::default();
        face.prepare_for_sort();
        assert!(face.extrema().is_inverted());
        assert_eq!(face.extrema().x_min, f64::MAX);
        assert_eq!(face.extrema().x_max, f64::MIN);
    }

    #[test]
    fn clip_empty_face_does_nothing() {
        let clipper = Scripted::new(&[]);
        let mut face = Face::default();
        face.clip(&clipper);
        assert!(face.is_empty());
        assert!(clipper.seen.borrow().is_empty());
    }

    #[test]
    fn clip_single_vertex_as_zero_length_segment() {
        let p = Vec3::new(0.5, 0.5, 0.5);

        let clipper = Scripted::new(&[ClipOutcome::BothIn]);
        let mut face = Face::from_vertices(vec![p]);
        face.clip(&clipper);
        assert_eq!(face.vertices(), &[p]);
        assert_eq!(clipper.seen.borrow()[0], (p, p));

        let clipper = Scripted::new(&[ClipOutcome::BothOut]);
        let mut face = Face::from_vertices(vec![p]);
        face.clip(&clipper);
        assert!(face.is_empty());
    }

    #[test]
    fn clip_segment_keeps_adjusted_pair() {
        let engine = ClipEngine::default();
        let mut face = Face::from_vertices(vec![Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]);
        face.clip(&engine);
        assert_eq!(face.len(), 2);
        assert_relative_eq!(face.vertices()[1].x, 1.0);

        let mut gone = Face::from_vertices(vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        gone.clip(&engine);
        assert!(gone.is_empty());
    }

    #[test]
    fn clip_polygon_walks_closing_edge() {
        let clipper = Scripted::new(&[
            ClipOutcome::BothIn,
            ClipOutcome::BothOut,
            ClipOutcome::Clipped,
        ]);
        let mut face = triangle();
        face.clip(&clipper);

        let seen = clipper.seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], (Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO));

        // first and last edges survive, each contributing both endpoints
        assert_eq!(
            face.vertices(),
            &[
                Vec3::ZERO,
                Vec3::RIGHT,
                Vec3::UP,
                Vec3::ZERO,
            ]
        );
    }

    #[test]
    fn clip_inside_polygon_duplicates_corners() {
        let mut face = Face::from_vertices(vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        ]);
        face.clip(&ClipEngine::new(ViewVolume::default()));
        assert_eq!(face.len(), 6);
        assert_eq!(face.vertices()[1], face.vertices()[2]);
    }

    #[test]
    fn clip_invalidates_cached_geometry() {
        let mut face = Face::from_vertices(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        ]);
        let before = face.centroid().unwrap();
        face.clip(&ClipEngine::default());
        assert_ne!(face.centroid().unwrap(), before);
    }

    #[test]
    fn projected_points_apply_offset_and_drop_z() {
        let face = Face::from_vertices(vec![Vec3::new(1.0, 2.0, 5.0), Vec3::new(3.0, 4.0, 5.0)]);
        assert_eq!(
            face.projected_points_2d(10.0, 10.0),
            vec![Vec2::new(11.0, 12.0), Vec2::new(13.0, 14.0)]
        );
    }

    #[test]
    fn to_points_round_trips_coordinates() {
        let face = triangle();
        let points = face.to_points();
        assert_eq!(points.len(), 3);
        assert_eq!((points[1].x, points[1].y, points[1].z), (1.0, 0.0, 0.0));
        assert!(points[1].linked_vertex().is_none());
    }

    #[test]
    fn reset_keeps_xy_extrema_only() {
        let mut face = Face::from_vertices(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        ]);
        face.prepare_for_sort();
        face.reset();

        assert!(face.is_empty());
        assert_eq!(face.normal(), None);
        assert_eq!(face.centroid(), None);

        let e = face.extrema();
        assert_eq!((e.x_min, e.x_max), (1.0, 7.0));
        assert_eq!((e.y_min, e.y_max), (2.0, 8.0));
        assert_eq!((e.z_min, e.z_max), (0.0, 0.0));
    }

    #[test]
    fn clear_derived_keeps_vertices() {
        let mut face = triangle();
        face.normal();
        face.clear_derived();
        assert_eq!(face.len(), 3);
        assert_eq!(face.normal(), Some(Vec3::FORWARD));
    }

    #[test]
    fn nearer_square_is_in_front_when_outside() {
        // With the outside flag the plane normal points away from the origin,
        // so the square nearer the origin occludes the farther one.
        let near = square_at(2.0);
        let far = square_at(3.0);

        assert!(near.is_in_front_of(&far, true));
        assert!(!far.is_in_front_of(&near, true));
        assert!(!near.is_in_front_of(&far, false));
        assert!(far.is_in_front_of(&near, false));
    }

    #[test]
    fn relation_is_anti_symmetric_for_a_fixed_flag() {
        let a = square_at(2.0);
        let b = square_at(3.0);
        for flag in [true, false] {
            assert!(!(a.is_in_front_of(&b, flag) && b.is_in_front_of(&a, flag)));
            // Flipping the flag and the roles together asks the same question.
            assert_eq!(a.is_in_front_of(&b, flag), b.is_in_front_of(&a, !flag));
        }
    }

    #[test]
    fn coplanar_points_are_not_in_front() {
        let a = square_at(1.0);
        let b = square_at(1.0);
        assert!(!a.is_in_front_of(&b, true));
        assert!(!a.is_in_front_of(&b, false));
    }

    #[test]
    fn degenerate_pair_is_always_in_front() {
        let mut a = Face::from_vertices(vec![Vec3::ZERO, Vec3::ONE]);
        let mut b = Face::from_vertices(vec![Vec3::ONE * 5.0]);
        a.prepare_for_sort();
        b.prepare_for_sort();
        assert!(a.is_in_front_of(&b, true));
        assert!(b.is_in_front_of(&a, false));
    }

    #[test]
    fn roles_swap_when_only_other_defines_a_plane() {
        let plane = square_at(1.0);
        let mut point = Face::from_vertices(vec![Vec3::new(0.5, 0.5, 3.0)]);
        point.prepare_for_sort();

        // Swapped test uses the square's plane with the flag inverted.
        assert_eq!(
            point.is_in_front_of(&plane, true),
            plane.is_in_front_of(&point, false)
        );
        assert_eq!(
            point.is_in_front_of(&plane, false),
            plane.is_in_front_of(&point, true)
        );
    }

    #[test]
    fn unprepared_faces_compare_as_degenerate() {
        let a = triangle();
        let b = triangle();
        assert!(a.is_in_front_of(&b, true));
    }
}
