//! Random simple polygons in 2D (radial jitter around a center).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the vertices in angle order.
//! - Angular jitter is clamped below half the spacing, so angles stay strictly
//!   increasing: the result is simple, with vertices in counter-clockwise
//!   angular order around `center`. With at least five vertices and the default
//!   jitter every angular gap stays below π, so `center` is interior.
//! - Determinism: one `StdRng` seeded from `seed`.
//!
//! Used by property tests and benches as a source of non-convex fixtures.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `radius * (1 + u)` with `u∈[-radial_jitter, radial_jitter]`. Clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: Point,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 16 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            radius: 1.0,
            center: Point::origin(),
        }
    }
}

/// Draw a random simple polygon in angular order (at least 3 vertices).
pub fn random_star_polygon(cfg: StarCfg, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.radius.abs().max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            cfg.center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect()
}
