//! Linear RGB triplets.
//!
//! [`Vec3`] carries double-precision linear light through a simulation:
//! decode, project, blend, encode. Only the final channels are quantized.
//!
//! ```rust
//! use vtcolor_math::Vec3;
//!
//! let simulated = Vec3::new(0.2, 0.2, 0.6);
//! let original = Vec3::new(0.6, 0.0, 0.2);
//! let half = simulated * 0.5 + original * 0.5;
//! assert_eq!(half.to_array(), [0.4, 0.1, 0.4]);
//! ```

use std::ops::{Add, Mul};

/// Linear RGB triplet; x=R, y=G, z=B.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// Red
    pub x: f64,
    /// Green
    pub y: f64,
    /// Blue
    pub z: f64,
}

impl Vec3 {
    /// Black.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product, summed left to right.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
