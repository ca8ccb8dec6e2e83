//! Brettel, Viénot & Mollon (1997) dichromat simulation.
//!
//! Linear RGB space is split by a plane through the origin. Each half is
//! projected onto its own half-plane of dichromat-visible colors by a
//! separate 3x3 operator, because a dichromat's confusion lines do not
//! collapse onto a single plane.
//!
//! ```text
//! projection = dot(linear_rgb, separation_normal)
//! operator   = if projection >= 0 { plane_a } else { plane_b }
//! simulated  = operator * linear_rgb
//! ```
//!
//! # Reference
//!
//! H. Brettel, F. Viénot, J. D. Mollon, "Computerized simulation of color
//! appearance for dichromats", J. Opt. Soc. Am. A 14, 2647-2655 (1997).
//! Matrices are the sRGB-space precomputation popularized by libDaltonLens.

use tracing::trace;
use vtcolor_core::Deficiency;
use vtcolor_math::{Mat3, Vec3};

use crate::Simulator;

/// Constants for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrettelParams {
    /// Operator for the half-space where the projection is non-negative.
    pub plane_a: Mat3,
    /// Operator for the other half-space.
    pub plane_b: Mat3,
    /// Normal of the separation plane, in linear RGB.
    pub separation_normal: Vec3,
}

impl BrettelParams {
    /// Picks the operator for a linear RGB color.
    #[inline]
    pub fn select(&self, linear: Vec3) -> (&Mat3, f64) {
        let projection = linear.dot(self.separation_normal);
        if projection >= 0.0 {
            (&self.plane_a, projection)
        } else {
            (&self.plane_b, projection)
        }
    }
}

/// Protan (red-blind).
pub const PROTAN: BrettelParams = BrettelParams {
    plane_a: Mat3::from_flat([
        0.14980, 1.19548, -0.34528,
        0.10764, 0.84864, 0.04372,
        0.00384, -0.00540, 1.00156,
    ]),
    plane_b: Mat3::from_flat([
        0.14570, 1.16172, -0.30742,
        0.10816, 0.85291, 0.03892,
        0.00386, -0.00524, 1.00139,
    ]),
    separation_normal: Vec3::new(0.00048, 0.00393, -0.00441),
};

/// Deutan (green-blind).
pub const DEUTAN: BrettelParams = BrettelParams {
    plane_a: Mat3::from_flat([
        0.36477, 0.86381, -0.22858,
        0.26294, 0.64245, 0.09462,
        -0.02006, 0.02728, 0.99278,
    ]),
    plane_b: Mat3::from_flat([
        0.37298, 0.88166, -0.25464,
        0.25954, 0.63506, 0.10540,
        -0.01980, 0.02784, 0.99196,
    ]),
    separation_normal: Vec3::new(-0.00281, -0.00611, 0.00892),
};

/// Tritan (blue-yellow).
pub const TRITAN: BrettelParams = BrettelParams {
    plane_a: Mat3::from_flat([
        1.01277, 0.13548, -0.14826,
        -0.01243, 0.86812, 0.14431,
        0.07589, 0.80500, 0.11911,
    ]),
    plane_b: Mat3::from_flat([
        0.93678, 0.18979, -0.12657,
        0.06154, 0.81526, 0.12320,
        -0.37562, 1.12767, 0.24796,
    ]),
    separation_normal: Vec3::new(0.03901, -0.02788, -0.01113),
};

/// Parameters for a deficiency.
#[inline]
pub fn params(deficiency: Deficiency) -> &'static BrettelParams {
    match deficiency {
        Deficiency::Protan => &PROTAN,
        Deficiency::Deutan => &DEUTAN,
        Deficiency::Tritan => &TRITAN,
    }
}

/// Two-plane simulator.
///
/// # Example
///
/// ```rust
/// use vtcolor_core::Deficiency;
/// use vtcolor_cvd::{Brettel1997, Simulator};
///
/// let rgb = Brettel1997.simulate([0, 0, 135], Deficiency::Protan, 1.0).unwrap();
/// assert_eq!(rgb, [0, 24, 135]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brettel1997;

impl Simulator for Brettel1997 {
    fn name(&self) -> &'static str {
        "brettel1997"
    }

    fn simulate_linear(&self, linear: Vec3, deficiency: Deficiency) -> Vec3 {
        let (operator, projection) = params(deficiency).select(linear);
        trace!(
            %deficiency,
            projection,
            plane = if projection >= 0.0 { "a" } else { "b" },
            "brettel1997::select"
        );
        *operator * linear
    }
}
