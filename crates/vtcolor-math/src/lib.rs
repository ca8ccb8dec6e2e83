//! # vtcolor-math
//!
//! Math primitives for linear RGB color transforms:
//!
//! - [`Vec3`] - RGB triplets in double precision
//! - [`Mat3`] - 3x3 row-major matrices applied to column vectors
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vtcolor_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_flat([
//!     0.5, 0.5, 0.0,
//!     0.5, 0.5, 0.0,
//!     0.0, 0.0, 1.0,
//! ]);
//! let out = m * Vec3::new(1.0, 0.0, 0.25);
//! assert_eq!(out, Vec3::new(0.5, 0.5, 0.25));
//! ```
//!
//! # Used By
//!
//! - `vtcolor-cvd` - deficiency simulation matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
