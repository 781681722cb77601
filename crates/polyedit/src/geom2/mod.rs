//! 2D world-space geometry: homogeneous affine maps and basic predicates.
//!
//! Purpose
//! - Transform engine: build 3×3 row-vector matrices, compose them once per
//!   logical operation, apply to a polygon's points.
//! - Predicates: segment intersection, even-odd containment, half-plane
//!   classification against a directed edge.
//!
//! Conventions
//! - World coordinates, y up. Positive angles and positive cross products are
//!   counter-clockwise / left.
//! - Non-robust `f64` arithmetic; the only tolerance is `GeomCfg::eps_parallel`.
//!
//! Code cross-refs: `Affine2`, `Polygon`, `Edge`, `Side`, `GeomCfg`

mod affine;
mod predicates;
pub mod rand;
mod types;

pub use affine::Affine2;
pub use predicates::{
    classify, classify_sign, distance_to_segment, find_intersection, find_intersection_cfg,
    is_near_edge, is_point_in_polygon, Side,
};
pub use types::{Edge, GeomCfg, Point, Polygon};

#[cfg(test)]
mod tests;
