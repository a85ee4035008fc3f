//! Mesh construction and the derived traversal indices.
//!
//! A [`Delaunay`] adopts the raw `triangles`/`halfedges`/`hull` arrays of an
//! external construction and derives two indices over them:
//! - `inedges[v]`: one incoming half-edge per vertex, exterior half-edges
//!   preferred so walks started on the hull can always see outward;
//! - `hull_index[v]`: the position of `v` in `hull`, [`EMPTY`] off the hull.
//!
//! With 1 or 2 distinct input points no real triangle exists; the arrays are
//! then replaced by a single synthetic triangle over the hull vertices so
//! the walker and the extractors stay defined without per-query special
//! cases.

mod extract;
mod types;
mod walk;

#[cfg(test)]
mod proptests;

use nalgebra::Vector2;

pub use types::{InvalidTriangulation, RawTriangulation, Segment, Triangle, EMPTY};
pub use walk::{next_halfedge, prev_halfedge};

/// Planar Delaunay mesh with adjacency indices.
///
/// Owns the flat point buffer (`[x0, y0, x1, y1, ..]`), the raw arrays of
/// the last adopted triangulation, and the derived indices. Readers borrow;
/// [`Delaunay::update`] replaces everything in place, so no borrowed view
/// can survive across an update.
pub struct Delaunay {
    points: Vec<f64>,
    triangles: Vec<usize>,
    halfedges: Vec<usize>,
    hull: Vec<usize>,
    inedges: Vec<usize>,
    hull_index: Vec<usize>,
}

impl Delaunay {
    /// Triangulate `points` with the external construction and build the
    /// mesh over the result.
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        let sites: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let raw = RawTriangulation::from(delaunator::triangulate(&sites));
        let mut coords = Vec::with_capacity(points.len() * 2);
        for p in points {
            coords.push(p.x);
            coords.push(p.y);
        }
        debug_assert!(Self::validate(coords.len(), &raw).is_ok());
        let mut mesh = Self::empty(coords);
        mesh.rebuild(raw);
        mesh
    }

    /// Build a mesh from a flat coordinate buffer and a caller-supplied raw
    /// triangulation over it.
    ///
    /// Fails with [`InvalidTriangulation`] when the arrays are structurally
    /// malformed; nothing is built in that case.
    pub fn new(points: Vec<f64>, raw: RawTriangulation) -> Result<Self, InvalidTriangulation> {
        Self::validate(points.len(), &raw)?;
        let mut mesh = Self::empty(points);
        mesh.rebuild(raw);
        Ok(mesh)
    }

    /// Replace the point buffer and raw triangulation, recomputing every
    /// derived index.
    ///
    /// The caller re-runs the external construction first; this method only
    /// adopts its output. Validation happens before any mutation, so a
    /// failed update leaves the previous mesh fully intact.
    pub fn update(
        &mut self,
        points: Vec<f64>,
        raw: RawTriangulation,
    ) -> Result<(), InvalidTriangulation> {
        Self::validate(points.len(), &raw)?;
        self.points = points;
        self.rebuild(raw);
        Ok(())
    }

    fn empty(points: Vec<f64>) -> Self {
        Self {
            points,
            triangles: Vec::new(),
            halfedges: Vec::new(),
            hull: Vec::new(),
            inedges: Vec::new(),
            hull_index: Vec::new(),
        }
    }

    /// Structural shape checks. Length invariants per the input contract;
    /// index-range checks so every post-build reader is total.
    fn validate(coord_len: usize, raw: &RawTriangulation) -> Result<(), InvalidTriangulation> {
        if coord_len % 2 != 0 {
            return Err(InvalidTriangulation::OddCoordinateCount { len: coord_len });
        }
        let n = coord_len / 2;
        if raw.triangles.len() != raw.halfedges.len() {
            return Err(InvalidTriangulation::HalfedgeMismatch {
                triangles: raw.triangles.len(),
                halfedges: raw.halfedges.len(),
            });
        }
        if raw.triangles.len() % 3 != 0 {
            return Err(InvalidTriangulation::PartialTriangle {
                len: raw.triangles.len(),
            });
        }
        if let Some(&v) = raw.triangles.iter().find(|&&v| v >= n) {
            return Err(InvalidTriangulation::IndexOutOfRange {
                array: "triangles",
                index: v,
                limit: n,
            });
        }
        if let Some(&v) = raw.hull.iter().find(|&&v| v >= n) {
            return Err(InvalidTriangulation::IndexOutOfRange {
                array: "hull",
                index: v,
                limit: n,
            });
        }
        if let Some(&e) = raw
            .halfedges
            .iter()
            .find(|&&e| e != EMPTY && e >= raw.triangles.len())
        {
            return Err(InvalidTriangulation::IndexOutOfRange {
                array: "halfedges",
                index: e,
                limit: raw.triangles.len(),
            });
        }
        Ok(())
    }

    /// Adopt validated raw arrays and recompute `inedges` / `hull_index`.
    fn rebuild(&mut self, raw: RawTriangulation) {
        let n = self.points.len() / 2;
        let RawTriangulation {
            triangles,
            halfedges,
            hull,
        } = raw;
        self.triangles = triangles;
        self.halfedges = halfedges;
        self.hull = hull;

        self.inedges.clear();
        self.inedges.resize(n, EMPTY);
        self.hull_index.clear();
        self.hull_index.resize(n, EMPTY);

        // One incoming half-edge per vertex. Exterior half-edges always win
        // so boundary vertices start their rotation facing outward.
        for e in 0..self.halfedges.len() {
            let p = self.triangles[next_halfedge(e)];
            if self.halfedges[e] == EMPTY || self.inedges[p] == EMPTY {
                self.inedges[p] = e;
            }
        }

        for (i, &v) in self.hull.iter().enumerate() {
            self.hull_index[v] = i;
        }

        // 1 or 2 distinct points: substitute one synthetic triangle over the
        // hull vertices, half-edges all unpaired.
        if (1..=2).contains(&self.hull.len()) {
            let h0 = self.hull[0];
            let h1 = self.hull.get(1).copied().unwrap_or(h0);
            self.triangles = vec![h0, h1, h1];
            self.halfedges = vec![EMPTY; 3];
            self.inedges[h0] = 1;
            if self.hull.len() == 2 {
                self.inedges[h1] = 0;
            }
        }
    }

    /// Number of input points (including any the construction dropped as
    /// near-duplicates).
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len() / 2
    }

    /// Number of triangles in the adopted arrays.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of vertex `v`.
    #[inline]
    pub fn point(&self, v: usize) -> Vector2<f64> {
        Vector2::new(self.points[2 * v], self.points[2 * v + 1])
    }

    /// Flat coordinate buffer, `[x0, y0, x1, y1, ..]`.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Vertex-index triples of the adopted triangulation.
    #[inline]
    pub fn raw_triangles(&self) -> &[usize] {
        &self.triangles
    }

    /// Twin table; [`EMPTY`] marks boundary half-edges.
    #[inline]
    pub fn raw_halfedges(&self) -> &[usize] {
        &self.halfedges
    }

    /// Convex-hull vertices in the construction's winding order.
    #[inline]
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    /// Designated incoming half-edge per vertex ([`EMPTY`] when a vertex has
    /// no incident triangle).
    #[inline]
    pub fn inedges(&self) -> &[usize] {
        &self.inedges
    }

    /// Position of each vertex within `hull` ([`EMPTY`] off the hull).
    #[inline]
    pub fn hull_index(&self) -> &[usize] {
        &self.hull_index
    }
}
