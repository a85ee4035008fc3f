//! Voronoi cells derived from a built Delaunay mesh.
//!
//! The derivation reads the mesh arrays only: one circumcenter per triangle,
//! gathered around each site with the same incoming-edge rotation the
//! nearest-site walk uses. Cells of hull sites are open toward the outside;
//! they are closed by projecting the two boundary rays well past the clip
//! rectangle, after which every cell is clipped to the caller-supplied
//! bounds.
//!
//! A [`Voronoi`] borrows its mesh, so it cannot outlive the next
//! `update()` of that mesh.

mod clip;


use nalgebra::Vector2;

use crate::mesh::{next_halfedge, Delaunay, EMPTY};
use clip::clip_to_bounds;

/// Axis-aligned clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "inverted bounds");
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Containment test with `eps` slack on the boundary.
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    #[inline]
    fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    #[inline]
    fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
}

/// Numeric tolerances for the derivation.
#[derive(Clone, Copy, Debug)]
pub struct VoronoiCfg {
    /// Circumcenter denominators at or below this are treated as degenerate
    /// (collinear triangle, no finite circumcenter).
    pub eps_degenerate: f64,
}

impl Default for VoronoiCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-12,
        }
    }
}

/// A Voronoi cell clipped to the diagram bounds.
#[derive(Clone, Debug)]
pub struct VoronoiCell {
    /// Index of the generating site in the mesh point set.
    pub site: usize,
    /// Position of the generating site.
    pub generator: Vector2<f64>,
    /// Cell polygon after clipping.
    pub vertices: Vec<Vector2<f64>>,
    /// Whether the generating site lies on the convex hull (open cell before
    /// clipping).
    pub on_hull: bool,
}

impl VoronoiCell {
    /// Shoelace area of the cell polygon.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            acc += self.vertices[i].x * self.vertices[j].y;
            acc -= self.vertices[j].x * self.vertices[i].y;
        }
        (acc * 0.5).abs()
    }

    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).norm())
            .sum()
    }

    /// Ray-casting point-in-polygon test.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Bounded Voronoi diagram over a mesh snapshot.
pub struct Voronoi<'a> {
    mesh: &'a Delaunay,
    bounds: Bounds,
    /// One entry per triangle; `None` for degenerate (collinear) triangles.
    circumcenters: Vec<Option<Vector2<f64>>>,
    /// Outward perpendicular per hull edge: `rays[k]` belongs to the edge
    /// `hull[k] -> hull[(k + 1) % m]`.
    rays: Vec<Vector2<f64>>,
    /// Projection distance that clears the clip rectangle from any
    /// circumcenter.
    far: f64,
}

impl Delaunay {
    /// Derive bounded Voronoi cells from this mesh with default tolerances.
    pub fn voronoi(&self, bounds: Bounds) -> Voronoi<'_> {
        Voronoi::new(self, bounds, VoronoiCfg::default())
    }

    /// [`Delaunay::voronoi`] with explicit tolerances.
    pub fn voronoi_with(&self, bounds: Bounds, cfg: VoronoiCfg) -> Voronoi<'_> {
        Voronoi::new(self, bounds, cfg)
    }
}

impl<'a> Voronoi<'a> {
    pub fn new(mesh: &'a Delaunay, bounds: Bounds, cfg: VoronoiCfg) -> Self {
        let triangles = mesh.raw_triangles();
        let mut circumcenters = Vec::with_capacity(triangles.len() / 3);
        for t in triangles.chunks_exact(3) {
            circumcenters.push(circumcenter(
                mesh.point(t[0]),
                mesh.point(t[1]),
                mesh.point(t[2]),
                cfg.eps_degenerate,
            ));
        }

        // The hull is stored clockwise (in y-up coordinates), so the outward
        // perpendicular of an edge is its direction rotated 90° CCW.
        let hull = mesh.hull();
        let m = hull.len();
        let mut rays = Vec::with_capacity(m);
        for k in 0..m {
            let a = mesh.point(hull[k]);
            let b = mesh.point(hull[(k + 1) % m]);
            rays.push(Vector2::new(a.y - b.y, b.x - a.x));
        }

        let mut reach = bounds.diagonal().max(1.0);
        let mid = bounds.center();
        for c in circumcenters.iter().flatten() {
            reach = reach.max((c - mid).norm());
        }
        let far = 2.0 * (reach + bounds.diagonal()) + 1.0;

        Self {
            mesh,
            bounds,
            circumcenters,
            rays,
            far,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Circumcenter of triangle `t`, if it has one.
    #[inline]
    pub fn circumcenter(&self, t: usize) -> Option<Vector2<f64>> {
        self.circumcenters[t]
    }

    /// Clipped cell of site `i`.
    ///
    /// `None` when the site has no incident triangle (coincident point,
    /// degenerate mesh) or the cell does not intersect the bounds.
    pub fn cell(&self, i: usize) -> Option<VoronoiCell> {
        let polygon = self.cell_polygon(i)?;
        let vertices = clip_to_bounds(&polygon, self.bounds);
        if vertices.len() < 3 {
            return None;
        }
        Some(VoronoiCell {
            site: i,
            generator: self.mesh.point(i),
            vertices,
            on_hull: self.mesh.hull_index()[i] != EMPTY,
        })
    }

    /// All non-empty cells, in site order.
    pub fn cells(&self) -> impl Iterator<Item = VoronoiCell> + '_ {
        (0..self.mesh.num_points()).filter_map(|i| self.cell(i))
    }

    /// Unclipped cell polygon: circumcenters of the triangles around `i`,
    /// with hull cells closed through two far ray points.
    fn cell_polygon(&self, i: usize) -> Option<Vec<Vector2<f64>>> {
        let triangles = self.mesh.raw_triangles();
        let halfedges = self.mesh.raw_halfedges();
        let e0 = *self.mesh.inedges().get(i)?;
        if e0 == EMPTY || triangles.is_empty() {
            return None;
        }

        // Same rotation as the nearest-site walk, seeded at the designated
        // incoming edge (an exterior one for hull sites, so the sweep runs
        // boundary to boundary).
        let mut centers = Vec::new();
        let mut open = false;
        let mut e = e0;
        loop {
            centers.push(self.circumcenters[e / 3]?);
            e = next_halfedge(e);
            if triangles[e] != i {
                // Bad triangulation; keep what was gathered.
                break;
            }
            e = halfedges[e];
            if e == EMPTY {
                open = true;
                break;
            }
            if e == e0 {
                break;
            }
        }

        if open {
            let k = self.mesh.hull_index()[i];
            let m = self.rays.len();
            if k != EMPTY && m > 0 {
                // The first gathered triangle borders the hull edge arriving
                // at `i`, the last one the edge leaving it.
                let head = self.project(centers[0], self.rays[(k + m - 1) % m]);
                let tail = self.project(centers[centers.len() - 1], self.rays[k]);
                centers.insert(0, head);
                centers.push(tail);
            }
        }
        Some(centers)
    }

    fn project(&self, from: Vector2<f64>, dir: Vector2<f64>) -> Vector2<f64> {
        let len = dir.norm();
        if len <= f64::EPSILON {
            return from;
        }
        from + dir * (self.far / len)
    }
}

/// Circumcenter of the triangle `(a, b, c)`, or `None` when the points are
/// (nearly) collinear.
fn circumcenter(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    eps: f64,
) -> Option<Vector2<f64>> {
    let d = b - a;
    let e = c - a;
    let bl = d.norm_squared();
    let cl = e.norm_squared();
    let det = d.x * e.y - d.y * e.x;
    if det.abs() <= eps {
        return None;
    }
    let s = 0.5 / det;
    Some(Vector2::new(
        a.x + (e.y * bl - d.y * cl) * s,
        a.y + (d.x * cl - e.x * bl) * s,
    ))
}
