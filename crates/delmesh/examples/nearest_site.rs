//! Nearest-site lookup over a random point cloud.
//!
//! Usage:
//!   cargo run -p delmesh --example nearest_site -- [n]
//!
//! Triangulates `n` random sites (default 200), then answers a few queries
//! and prints the Voronoi cell of the first hit.

use delmesh::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);

    let mut rng = StdRng::seed_from_u64(2026);
    let sites: Vec<Vec2<f64>> = (0..n)
        .map(|_| Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();

    let mesh = Delaunay::from_points(&sites);
    println!(
        "mesh: {} sites, {} triangles, {} hull vertices",
        mesh.num_points(),
        mesh.num_triangles(),
        mesh.hull().len()
    );

    let voronoi = mesh.voronoi(Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)));
    for q in [Vec2::new(50.0, 50.0), Vec2::new(3.0, 97.0)] {
        match mesh.find(q.x, q.y) {
            Some(i) => {
                let p = mesh.point(i);
                let cell_area = voronoi.cell(i).map(|c| c.area()).unwrap_or(0.0);
                println!(
                    "query ({:.1}, {:.1}) -> site {i} at ({:.2}, {:.2}), cell area {cell_area:.2}",
                    q.x, q.y, p.x, p.y
                );
            }
            None => println!("query ({:.1}, {:.1}) -> empty mesh", q.x, q.y),
        }
    }
}
