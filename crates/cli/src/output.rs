//! JSON documents printed on stdout.

use polyedit::api::{Affine2, Point, Side};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PointOut {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointOut {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

pub fn points_out(points: &[Point]) -> Vec<PointOut> {
    points.iter().copied().map(PointOut::from).collect()
}

/// Row-major rows of the homogeneous matrix (row-vector convention).
pub fn matrix_rows(a: &Affine2) -> [[f64; 3]; 3] {
    let mut rows = [[0.0; 3]; 3];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, v) in row.iter_mut().enumerate() {
            *v = a.m[(r, c)];
        }
    }
    rows
}

pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
        Side::On => "on",
    }
}

#[derive(Serialize, Debug)]
pub struct TransformOut {
    pub kind: String,
    /// `None` when the operation was a no-op (centroid of an empty polygon).
    pub matrix: Option<[[f64; 3]; 3]>,
    pub points: Vec<PointOut>,
}

#[derive(Serialize, Debug)]
pub struct ClassifyOut {
    pub sign: i8,
    pub side: &'static str,
}
