//! Half-edge rotation primitives and the greedy nearest-site walk.

use super::{Delaunay, EMPTY};

/// Next half-edge counter-clockwise within the same triangle.
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Inverse rotation of [`next_halfedge`].
#[inline]
pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

impl Delaunay {
    #[inline]
    fn dist2(&self, v: usize, x: f64, y: f64) -> f64 {
        let dx = x - self.points[2 * v];
        let dy = y - self.points[2 * v + 1];
        dx * dx + dy * dy
    }

    /// One greedy-descent iteration from vertex `i` toward `(x, y)`.
    ///
    /// Rotates through the triangles incident to `i`, returning the incident
    /// vertex closest to the query (or `i` itself when no neighbor is
    /// closer). On the hull boundary the next hull vertex after `i` is
    /// consulted as the one neighbor the rotation cannot reach. A rotation
    /// that lands off-pivot means the half-edge table is locally
    /// inconsistent; the walk then keeps its best candidate instead of
    /// failing. Returns [`EMPTY`] only for an empty mesh.
    pub fn step(&self, i: usize, x: f64, y: f64) -> usize {
        let n = self.num_points();
        if n == 0 {
            return EMPTY;
        }
        if self.inedges[i] == EMPTY {
            // No incident triangle: hand the walk to the next vertex index
            // so `find` keeps progressing on index-less meshes.
            return (i + 1) % n;
        }

        let mut c = i;
        let mut dc = self.dist2(i, x, y);
        let e0 = self.inedges[i];
        let mut e = e0;
        loop {
            let t = self.triangles[e];
            let dt = self.dist2(t, x, y);
            if dt < dc {
                dc = dt;
                c = t;
            }

            e = next_halfedge(e);
            if self.triangles[e] != i {
                // Bad triangulation; keep the best candidate found so far.
                #[cfg(debug_assertions)]
                if std::env::var_os("DELMESH_DEBUG_WALK").is_some() {
                    eprintln!(
                        "inconsistent rotation around vertex {i} at half-edge {e}; keeping {c}"
                    );
                }
                break;
            }

            e = self.halfedges[e];
            if e == EMPTY {
                if self.hull.is_empty() {
                    break;
                }
                // Crossed the outer boundary: the only neighbor the rotation
                // cannot reach is the hull vertex after `i`. The wrapping add
                // keeps the lookup total if `i` is somehow off the hull
                // (EMPTY wraps to hull position 0).
                let h = self.hull[self.hull_index[i].wrapping_add(1) % self.hull.len()];
                if h != t && self.dist2(h, x, y) < dc {
                    return h;
                }
                break;
            }
            if e == e0 {
                break;
            }
        }
        c
    }

    /// Index of the site nearest to `(x, y)`, descending from vertex 0.
    ///
    /// This is a local search: it follows [`Delaunay::step`] until no closer
    /// site is found. On a valid Delaunay triangulation greedy descent has no
    /// local minima besides the global one, so the result is the true
    /// nearest site; on inconsistent tables it degrades to the best site
    /// encountered. `None` only for an empty mesh.
    pub fn find(&self, x: f64, y: f64) -> Option<usize> {
        self.find_from(x, y, 0)
    }

    /// Like [`Delaunay::find`], descending from `start` instead of vertex 0.
    pub fn find_from(&self, x: f64, y: f64, start: usize) -> Option<usize> {
        if self.num_points() == 0 {
            return None;
        }
        debug_assert!(start < self.num_points(), "start vertex out of range");

        // Stop on a fixed point, on a 2-cycle (oscillation in degenerate
        // geometry), or on returning to the start vertex. The start guard
        // ends the (i + 1) % n fallback cycle on meshes without a usable
        // index; genuine descents strictly shrink the distance each move and
        // never revisit a vertex.
        let mut prev = start;
        let mut cur = start;
        let mut c = self.step(start, x, y);
        while c != EMPTY && c != cur && c != prev && c != start {
            prev = cur;
            cur = c;
            c = self.step(cur, x, y);
        }
        if c == EMPTY {
            None
        } else {
            Some(c)
        }
    }
}
