//! Data types for the mesh layer.
//!
//! Kept small and explicit to make the `mod`, `walk`, and `extract` files
//! easy to read.

use std::fmt;

use nalgebra::Vector2;

/// Sentinel index for "no such half-edge / vertex".
///
/// Shared with the external triangulator so raw arrays can be adopted
/// without translation.
pub use delaunator::EMPTY;

/// Raw arrays handed over by the external Delaunay construction.
///
/// `triangles` holds vertex indices, each consecutive triple one triangle.
/// `halfedges[e]` is the twin of half-edge `e`, or [`EMPTY`] on the outer
/// boundary; it always has the same length as `triangles`. `hull` lists the
/// convex-hull vertices in the winding order the construction produced,
/// which is preserved untouched.
#[derive(Clone, Debug, Default)]
pub struct RawTriangulation {
    pub triangles: Vec<usize>,
    pub halfedges: Vec<usize>,
    pub hull: Vec<usize>,
}

impl From<delaunator::Triangulation> for RawTriangulation {
    fn from(t: delaunator::Triangulation) -> Self {
        Self {
            triangles: t.triangles,
            halfedges: t.halfedges,
            hull: t.hull,
        }
    }
}

/// Triangle view with winding normalized for downstream consumers
/// (reversed from the stored orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    /// Corner positions in emitted order.
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        [self.a, self.b, self.c]
    }
}

/// Undirected line segment between two mesh points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// Structural validation failures, surfaced before any mesh state changes.
///
/// These cover array shape only; geometric correctness of the triangulation
/// is the collaborator's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidTriangulation {
    /// Point buffer is not a whole number of `(x, y)` pairs.
    OddCoordinateCount { len: usize },
    /// `triangles` and `halfedges` must describe the same edge set.
    HalfedgeMismatch { triangles: usize, halfedges: usize },
    /// `triangles` length is not a multiple of three.
    PartialTriangle { len: usize },
    /// An entry refers past the end of its target array.
    IndexOutOfRange {
        array: &'static str,
        index: usize,
        limit: usize,
    },
}

impl fmt::Display for InvalidTriangulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddCoordinateCount { len } => write!(
                f,
                "point buffer holds {len} scalars (expected interleaved x, y pairs)"
            ),
            Self::HalfedgeMismatch {
                triangles,
                halfedges,
            } => write!(
                f,
                "triangles ({triangles}) and halfedges ({halfedges}) differ in length"
            ),
            Self::PartialTriangle { len } => {
                write!(f, "triangles length {len} is not a multiple of 3")
            }
            Self::IndexOutOfRange {
                array,
                index,
                limit,
            } => write!(f, "{array} entry {index} is out of range (limit {limit})"),
        }
    }
}

impl std::error::Error for InvalidTriangulation {}
