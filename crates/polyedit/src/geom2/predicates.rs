//! Geometry predicates over world points: segment intersection, even-odd
//! containment, and half-plane classification against a directed edge.
//!
//! None of these use robust arithmetic; degenerate inputs give a defined
//! "no result" (`None` / `false` / `Side::On`) instead of an error.

use super::types::{Edge, GeomCfg, Point};

/// Position of a point relative to a directed edge.
///
/// Convention: counter-clockwise positive. A positive cross product means the
/// point is to the left of `start → end` (y-up world).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    /// On the infinite line through the edge (not necessarily on the segment).
    On,
}

impl Side {
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
            Side::On => 0,
        }
    }
}

/// `(end - start) × (p - start)`.
#[inline]
fn cross_to_point(p: Point, edge: &Edge) -> f64 {
    let d = edge.direction();
    d.x * (p.y - edge.start.y) - d.y * (p.x - edge.start.x)
}

/// Classify `p` against the directed edge by the sign of the cross product.
pub fn classify(p: Point, edge: &Edge) -> Side {
    let c = cross_to_point(p, edge);
    if c > 0.0 {
        Side::Left
    } else if c < 0.0 {
        Side::Right
    } else {
        Side::On
    }
}

/// `classify` as a sign in `{-1, 0, 1}`.
#[inline]
pub fn classify_sign(p: Point, edge: &Edge) -> i8 {
    classify(p, edge).signum()
}

/// Intersection point of two closed segments, with the default tolerance.
#[inline]
pub fn find_intersection(a: &Edge, b: &Edge) -> Option<Point> {
    find_intersection_cfg(a, b, GeomCfg::default())
}

/// Intersection point of two closed segments.
///
/// Solves `a.start + t (a.end - a.start) = b.start + u (b.end - b.start)` and
/// accepts only `t, u ∈ [0, 1]`. Near-parallel pairs (`|denom| < eps_parallel`)
/// report `None`; collinear overlaps are not detected.
pub fn find_intersection_cfg(a: &Edge, b: &Edge, cfg: GeomCfg) -> Option<Point> {
    let (x1, y1) = (a.start.x, a.start.y);
    let (x2, y2) = (a.end.x, a.end.y);
    let (x3, y3) = (b.start.x, b.start.y);
    let (x4, y4) = (b.end.x, b.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < cfg.eps_parallel {
        return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// Even-odd (ray casting) containment.
///
/// Casts a ray towards +x and toggles on every edge `(i, i-1)` it crosses.
/// Fewer than three vertices is never "inside". Points exactly on the boundary
/// may land on either side.
pub fn is_point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        // straddle check first: guarantees pj.y != pi.y below
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance from `p` to the closed segment `edge`.
///
/// A zero-length edge measures to its start point.
pub fn distance_to_segment(p: Point, edge: &Edge) -> f64 {
    let d = edge.direction();
    let len_sq = d.norm_squared();
    let closest = if len_sq == 0.0 {
        edge.start
    } else {
        let t = ((p - edge.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        edge.start + d * t
    };
    (p - closest).norm()
}

/// Edge picking rule: within `tolerance` of the segment (inclusive).
#[inline]
pub fn is_near_edge(p: Point, edge: &Edge, tolerance: f64) -> bool {
    distance_to_segment(p, edge) <= tolerance
}
