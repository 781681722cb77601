//! 2D affine maps as 3×3 homogeneous matrices (row-vector convention).
//!
//! Convention
//! - A point is the row vector `[x, y, 1]` and maps as `[x', y', 1] = [x, y, 1] · M`.
//! - Translation therefore lives in the bottom row: `[[1,0,0],[0,1,0],[tx,ty,1]]`.
//! - Chains compose left to right in application order: `A.then(B)` is `A · B`,
//!   i.e. "apply A, then B". About-center ops are `T(-c) · L · T(c)`.
//! - Positive rotation angles turn counter-clockwise in a y-up world.
//!
//! The fixed-size `Matrix3` makes non-3×3 products unrepresentable.

use nalgebra::{Matrix3, RowVector3};

use super::types::Point;

/// Affine map in homogeneous row-vector form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix3<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    #[inline]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                tx, ty, 1.0,
            ),
        }
    }

    /// Rotation about the origin by `angle_deg` degrees.
    #[inline]
    pub fn rotation(angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Self {
            m: Matrix3::new(
                c, s, 0.0, //
                -s, c, 0.0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    #[inline]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix3::new(
                sx, 0.0, 0.0, //
                0.0, sy, 0.0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// `T(-center) · R(angle) · T(center)`.
    pub fn rotation_about(angle_deg: f64, center: Point) -> Self {
        Self::about(center, Self::rotation(angle_deg))
    }

    /// `T(-center) · S(sx, sy) · T(center)`.
    pub fn scale_about(sx: f64, sy: f64, center: Point) -> Self {
        Self::about(center, Self::scale(sx, sy))
    }

    /// Conjugate a linear op so that `center` stays fixed.
    fn about(center: Point, linear: Self) -> Self {
        Self::translation(-center.x, -center.y)
            .then(&linear)
            .then(&Self::translation(center.x, center.y))
    }

    /// Composition "self, then `next`" (`self.m · next.m`).
    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            m: self.m * next.m,
        }
    }

    /// Inverse map, or `None` when singular (e.g. a zero scale factor).
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|m| Self { m })
    }

    /// `[x, y, 1] · M`, dropping the homogeneous coordinate.
    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        let r = RowVector3::new(p.x, p.y, 1.0) * self.m;
        Point::new(r[0], r[1])
    }

    /// Replace every point in place; count and order are untouched.
    pub fn apply_points(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.apply_point(*p);
        }
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: Affine2) -> Self::Output {
        self.then(&rhs)
    }
}
