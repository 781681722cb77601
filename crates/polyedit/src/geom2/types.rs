//! Basic 2D value types and tolerances shared by the transform engine and predicates.
//!
//! - `GeomCfg`: centralizes the epsilon used by the segment-intersection test.
//! - `Edge`: directed segment `start → end`; order matters for classification.
//! - `Polygon`: ordered vertex list, closed by an implicit `last → first` edge.
//!
//! Coordinates are world coordinates (y up); nothing here knows about pixels.

use nalgebra::{Point2, Vector2};

/// A point in world coordinates.
pub type Point = Point2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// `|denom|` below this treats two segments as parallel.
    pub eps_parallel: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_parallel: 1e-4 }
    }
}

/// Directed edge `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }
    /// Same segment, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Ordered vertex list; insertion order is boundary order.
///
/// Invariants
/// - Transforms replace coordinates but never change the vertex count or order.
/// - Containment and edge tests are meaningful only for `len() >= 3`; one- and
///   two-point polygons are kept as degenerate vertex/segment shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable coordinates; the slice cannot grow or shrink.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Edges `p[i] → p[i+1]`, including the wrap-around `p[n-1] → p[0]`.
    ///
    /// Fewer than two points yield no edges. Two points yield `a → b` and `b → a`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = if self.points.len() < 2 { 0 } else { self.points.len() };
        (0..n).map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices. `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        Some(Point::from(sum / self.points.len() as f64))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
