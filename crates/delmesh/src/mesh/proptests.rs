//! Randomized structural properties over integer-lattice point clouds.
//!
//! Lattice coordinates keep the external construction from dropping
//! near-duplicate sites, so the coverage property is exact.

use proptest::prelude::*;

use super::*;
use nalgebra::Vector2;

fn cloud(max: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    proptest::collection::vec((0u32..40, 0u32..40), 1..max).prop_map(|mut cells| {
        cells.sort_unstable();
        cells.dedup();
        cells
            .into_iter()
            .map(|(x, y)| Vector2::new(x as f64 * 3.5, y as f64 * 3.5))
            .collect()
    })
}

proptest! {
    #[test]
    fn twin_symmetry_and_inedge_coverage(points in cloud(60)) {
        let mesh = Delaunay::from_points(&points);
        let t = mesh.raw_triangles();
        let h = mesh.raw_halfedges();
        prop_assert_eq!(t.len(), h.len());
        prop_assert_eq!(t.len() % 3, 0);
        for (e, &twin) in h.iter().enumerate() {
            if twin != EMPTY {
                prop_assert_eq!(h[twin], e);
            }
        }
        for &v in t {
            prop_assert_ne!(mesh.inedges()[v], EMPTY);
        }
        if !t.is_empty() {
            for &v in mesh.hull() {
                prop_assert_eq!(h[mesh.inedges()[v]], EMPTY);
            }
        }
    }

    #[test]
    fn find_agrees_with_brute_force(
        points in cloud(60),
        qx in -10.0..150.0f64,
        qy in -10.0..150.0f64,
    ) {
        let mesh = Delaunay::from_points(&points);
        let found = mesh.find(qx, qy);
        prop_assert!(found.is_some());
        if mesh.num_triangles() == 0 {
            // collinear or tiny cloud: only termination is promised
            return Ok(());
        }
        let q = Vector2::new(qx, qy);
        let best = points
            .iter()
            .map(|p| (p - q).norm_squared())
            .fold(f64::INFINITY, f64::min);
        let got = (points[found.unwrap()] - q).norm_squared();
        // ties are fine; a worse-than-nearest answer is not
        prop_assert!(got <= best + 1e-9, "got {got}, best {best}");
    }

    #[test]
    fn roundtrip_and_idempotence(points in cloud(40)) {
        let mesh = Delaunay::from_points(&points);
        let tris: Vec<Triangle> = mesh.triangles().collect();
        for (tri, stored) in tris.iter().zip(mesh.raw_triangles().chunks_exact(3)) {
            prop_assert_eq!(tri.vertices(), [
                mesh.point(stored[2]),
                mesh.point(stored[1]),
                mesh.point(stored[0]),
            ]);
        }
        let again: Vec<Triangle> = mesh.triangles().collect();
        prop_assert_eq!(tris, again);
    }
}
