//! Read-only geometric views over a built mesh.
//!
//! All extractors are lazy borrowing iterators; they reflect the mesh as of
//! the last build/update and may be re-run any number of times.

use nalgebra::Vector2;

use super::{Delaunay, Segment, Triangle, EMPTY};

impl Delaunay {
    /// Triangles of the mesh, one per stored index triple.
    ///
    /// The stored winding is reversed on the way out: triple `(t0, t1, t2)`
    /// is emitted as `(P(t2), P(t1), P(t0))`, the orientation downstream
    /// geometry consumers expect.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.chunks_exact(3).map(|t| Triangle {
            a: self.point(t[2]),
            b: self.point(t[1]),
            c: self.point(t[0]),
        })
    }

    /// Interior-edge skeleton: every edge shared by two triangles, exactly
    /// once per undirected pair.
    ///
    /// Of a twin pair the half-edge with the smaller index is kept; boundary
    /// half-edges have no twin and belong to [`Delaunay::hull_segments`]
    /// instead.
    pub fn edge_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.halfedges.iter().enumerate().filter_map(|(e, &twin)| {
            if twin == EMPTY || twin < e {
                return None;
            }
            Some(Segment {
                a: self.point(self.triangles[e]),
                b: self.point(self.triangles[twin]),
            })
        })
    }

    /// Hull vertex positions in stored hull order.
    pub fn hull_points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.hull.iter().map(|&v| self.point(v))
    }

    /// Closed hull contour: one segment per hull vertex, the last closing
    /// back to the first. A one-vertex hull yields a single degenerate
    /// segment.
    pub fn hull_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let m = self.hull.len();
        (0..m).map(move |i| Segment {
            a: self.point(self.hull[i]),
            b: self.point(self.hull[(i + 1) % m]),
        })
    }
}
