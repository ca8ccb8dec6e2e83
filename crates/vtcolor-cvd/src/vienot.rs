//! Viénot, Brettel & Mollon (1999) dichromat simulation.
//!
//! The "simple" algorithm: one global projection per deficiency, applied
//! in linear RGB. It is exact for protan and deutan under the 1999 model
//! and only an approximation for tritan.
//!
//! # Reference
//!
//! F. Viénot, H. Brettel, J. D. Mollon, "Digital video colourmaps for
//! checking the legibility of displays by dichromats", Color Research &
//! Application 24, 243-252 (1999).

use vtcolor_core::Deficiency;
use vtcolor_math::{Mat3, Vec3};

use crate::Simulator;

/// Protan projection.
pub const PROTAN: Mat3 = Mat3::from_flat([
    0.11238, 0.88762, 0.00000,
    0.11238, 0.88762, 0.00000,
    0.00401, -0.00401, 1.00000,
]);

/// Deutan projection.
pub const DEUTAN: Mat3 = Mat3::from_flat([
    0.29275, 0.70725, 0.00000,
    0.29275, 0.70725, 0.00000,
    -0.02234, 0.02234, 1.00000,
]);

/// Tritan projection.
pub const TRITAN: Mat3 = Mat3::from_flat([
    1.00000, 0.14461, -0.14461,
    0.00000, 0.85924, 0.14076,
    0.00000, 0.85924, 0.14076,
]);

/// Projection matrix for a deficiency.
#[inline]
pub fn matrix(deficiency: Deficiency) -> &'static Mat3 {
    match deficiency {
        Deficiency::Protan => &PROTAN,
        Deficiency::Deutan => &DEUTAN,
        Deficiency::Tritan => &TRITAN,
    }
}

/// Single-matrix simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vienot1999;

impl Simulator for Vienot1999 {
    fn name(&self) -> &'static str {
        "vienot1999"
    }

    fn simulate_linear(&self, linear: Vec3, deficiency: Deficiency) -> Vec3 {
        *matrix(deficiency) * linear
    }
}
