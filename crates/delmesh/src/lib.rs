//! Planar Delaunay mesh adjacency and queries.
//!
//! The triangulation itself comes from an external construction (the
//! `delaunator` crate); this crate owns everything layered on top of its raw
//! `triangles`/`halfedges`/`hull` arrays:
//! - auxiliary traversal indices (`inedges`, `hull_index`),
//! - geometric extraction (triangle list, interior-edge skeleton, hull
//!   contour),
//! - greedy nearest-site point location (`step`/`find`),
//! - bounded Voronoi cells derived from the same arrays.
//!
//! The mesh is an exclusively-owned value: `update()` replaces the raw
//! triangulation and every derived array in place, and all readers borrow.
//! Structural problems are rejected at build time ([`InvalidTriangulation`]);
//! after a successful build every reader is total.

pub mod mesh;
pub mod voronoi;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use mesh::{
    next_halfedge, prev_halfedge, Delaunay, InvalidTriangulation, RawTriangulation, Segment,
    Triangle, EMPTY,
};
pub use nalgebra::Vector2 as Vec2;
pub use voronoi::{Bounds, Voronoi, VoronoiCell, VoronoiCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mesh::{Delaunay, RawTriangulation, Segment, Triangle, EMPTY};
    pub use crate::voronoi::{Bounds, Voronoi, VoronoiCell, VoronoiCfg};
    pub use nalgebra::Vector2 as Vec2;
}
