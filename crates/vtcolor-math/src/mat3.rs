//! 3x3 operators on linear RGB.
//!
//! Row-major storage applied to column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! Published simulation matrices are printed as nine row-major numbers,
//! which [`Mat3::from_flat`] takes directly.

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 matrix for linear RGB transforms.
///
/// # Example
///
/// ```rust
/// use vtcolor_math::{Mat3, Vec3};
///
/// let swap_rg = Mat3::from_flat([
///     0.0, 1.0, 0.0,
///     1.0, 0.0, 0.0,
///     0.0, 0.0, 1.0,
/// ]);
/// assert_eq!(swap_rg * Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.2, 0.1, 0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from nine row-major values.
    #[inline]
    pub const fn from_flat(v: [f64; 9]) -> Self {
        Self {
            m: [[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]],
        }
    }

    /// Applies the matrix to a vector. Each component is a row dot product.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let [r0, r1, r2] = self.m.map(Vec3::from_array);
        Vec3::new(r0.dot(v), r1.dot(v), r2.dot(v))
    }

    /// Sum of each row. Rows summing to 1 map neutral grays onto themselves.
    #[inline]
    pub fn row_sums(&self) -> Vec3 {
        let [r0, r1, r2] = self.m.map(|row| row.iter().sum());
        Vec3::new(r0, r1, r2)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_flat_is_row_major() {
        let m = Mat3::from_flat([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.m[1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_transform() {
        let m = Mat3::from_flat([1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(6.0, 5.0, 11.0));
    }

    #[test]
    fn test_row_sums() {
        let m = Mat3::from_flat([0.25, 0.75, 0.0, 0.25, 0.75, 0.0, 0.0, 0.0, 1.0]);
        for s in m.row_sums().to_array() {
            assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
        }
    }
}
