//! Rectangle clipping for cell polygons.

use nalgebra::Vector2;

use super::Bounds;

/// Sutherland-Hodgman clip of `polygon` against the four rectangle edges.
///
/// The clip edges run counter-clockwise (y-up), so "inside" is the left
/// half-plane of each edge. Works for any subject polygon orientation; cell
/// polygons are convex, so the result is exact.
pub(super) fn clip_to_bounds(polygon: &[Vector2<f64>], bounds: Bounds) -> Vec<Vector2<f64>> {
    let Bounds { min, max } = bounds;
    let corners = [
        Vector2::new(min.x, min.y),
        Vector2::new(max.x, min.y),
        Vector2::new(max.x, max.y),
        Vector2::new(min.x, max.y),
    ];

    let mut clipped = polygon.to_vec();
    for k in 0..4 {
        if clipped.is_empty() {
            break;
        }
        let a = corners[k];
        let b = corners[(k + 1) % 4];
        let input = std::mem::take(&mut clipped);
        let mut s = input[input.len() - 1];
        for p in input {
            let p_in = is_left(p, a, b);
            let s_in = is_left(s, a, b);
            if p_in {
                if !s_in {
                    if let Some(x) = intersection(s, p, a, b) {
                        clipped.push(x);
                    }
                }
                clipped.push(p);
            } else if s_in {
                if let Some(x) = intersection(s, p, a, b) {
                    clipped.push(x);
                }
            }
            s = p;
        }
    }
    clipped
}

#[inline]
fn is_left(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x) >= 0.0
}

/// Intersection of the (infinite) lines through `p1 -> p2` and `p3 -> p4`.
fn intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom.abs() < 1e-12 {
        return None;
    }
    let t = ((p3.x - p1.x) * d2.y - (p3.y - p1.y) * d2.x) / denom;
    Some(p1 + d1 * t)
}
