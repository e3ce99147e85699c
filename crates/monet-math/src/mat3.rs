//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] carries the fixed sRGB/XYZ/CAM16 matrices.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! The product itself is evaluated by glam's `DMat3`, which sums the three
//! column terms left to right, so results match the row-major formula above
//! bit for bit.

use crate::Vec3;
use std::ops::{Index, Mul};

/// A 3x3 matrix for color transformations.
///
/// # Example
///
/// ```rust
/// use monet_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::from_glam(self.to_glam() * v.to_glam())
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam is column-major, so transpose
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_transform_keeps_row_order() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m * Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(6.0, 15.0, 24.0));
        assert_eq!(m[1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_mat3_transform_matches_row_dot_products() {
        let m = Mat3::from_rows([
            [0.41233895, 0.35762064, 0.18051042],
            [0.2126, 0.7152, 0.0722],
            [0.01932141, 0.11916382, 0.95034478],
        ]);
        let v = Vec3::new(37.5, 0.125, 91.3);
        let out = m * v;
        for (i, got) in out.to_array().into_iter().enumerate() {
            let row = m[i];
            assert_eq!(got, row[0] * v.x + row[1] * v.y + row[2] * v.z);
        }
    }
}
