//! # vtcolor-cvd
//!
//! Simulates how an 8-bit sRGB color appears to people with a color
//! vision deficiency (CVD).
//!
//! # Pipeline
//!
//! ```text
//! sRGB (u8) -> EOTF -> linear RGB -> simulator -> severity blend -> OETF -> sRGB (u8)
//! ```
//!
//! The severity blend is a per-channel linear mix in linear light:
//!
//! ```text
//! result = simulated * severity + original * (1 - severity)
//! ```
//!
//! Severity 0 reproduces the input (up to gamma round-trip), severity 1
//! is the full dichromat simulation.
//!
//! # Algorithms
//!
//! Both algorithms implement [`Simulator`]; pick one with [`simulator`]:
//!
//! | Algorithm | Operator | Module |
//! |-----------|----------|--------|
//! | Brettel 1997 | two half-plane matrices per deficiency | [`brettel`] |
//! | Viénot 1999 | one matrix per deficiency | [`vienot`] |
//!
//! # Usage
//!
//! ```rust
//! use vtcolor_core::{Algorithm, Deficiency};
//! use vtcolor_cvd::simulate;
//!
//! let out = simulate([255, 0, 0], Deficiency::Deutan, 1.0, Algorithm::Brettel1997).unwrap();
//! assert_ne!(out, [255, 0, 0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt;

use tracing::debug;
use vtcolor_core::{Algorithm, Deficiency, Result, check_channel, check_severity};
use vtcolor_math::Vec3;
use vtcolor_transfer::srgb;

pub mod brettel;
pub mod vienot;

pub use brettel::Brettel1997;
pub use vienot::Vienot1999;

/// A deficiency simulation strategy.
///
/// Implementors provide the full-severity operator in linear light;
/// decoding, the severity blend and encoding are shared.
pub trait Simulator: fmt::Debug + Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Full-severity simulation of a linear RGB color.
    fn simulate_linear(&self, linear: Vec3, deficiency: Deficiency) -> Vec3;

    /// Simulates an 8-bit sRGB color at the given severity.
    ///
    /// # Errors
    ///
    /// Returns [`vtcolor_core::Error::OutOfRange`] if severity is outside
    /// `[0, 1]` or NaN.
    fn simulate(&self, rgb: [u8; 3], deficiency: Deficiency, severity: f64) -> Result<[u8; 3]> {
        let severity = check_severity(severity)?;
        let linear = Vec3::from_array(srgb::to_linear_rgb(rgb));
        let simulated = self.simulate_linear(linear, deficiency);
        let blended = blend(simulated, linear, severity);
        let out = srgb::to_srgb_rgb(blended.to_array());
        debug!(
            algorithm = self.name(),
            %deficiency,
            severity,
            ?rgb,
            ?out,
            "simulated deficiency"
        );
        Ok(out)
    }
}

/// Mixes a simulated color with the original by severity.
#[inline]
pub fn blend(simulated: Vec3, original: Vec3, severity: f64) -> Vec3 {
    simulated * severity + original * (1.0 - severity)
}

static BRETTEL: Brettel1997 = Brettel1997;
static VIENOT: Vienot1999 = Vienot1999;

/// Returns the strategy for an algorithm.
#[inline]
pub fn simulator(algorithm: Algorithm) -> &'static dyn Simulator {
    match algorithm {
        Algorithm::Brettel1997 => &BRETTEL,
        Algorithm::Vienot1999 => &VIENOT,
    }
}

/// Simulates an 8-bit sRGB color with the chosen algorithm.
///
/// # Errors
///
/// Returns [`vtcolor_core::Error::OutOfRange`] for a bad severity.
#[inline]
pub fn simulate(
    rgb: [u8; 3],
    deficiency: Deficiency,
    severity: f64,
    algorithm: Algorithm,
) -> Result<[u8; 3]> {
    simulator(algorithm).simulate(rgb, deficiency, severity)
}

/// Like [`simulate`], but takes unchecked integer channels.
///
/// # Errors
///
/// Returns [`vtcolor_core::Error::OutOfRange`] naming the first channel
/// outside `[0, 255]`, or the severity.
pub fn simulate_checked(
    r: i32,
    g: i32,
    b: i32,
    deficiency: Deficiency,
    severity: f64,
    algorithm: Algorithm,
) -> Result<[u8; 3]> {
    let rgb = [
        check_channel("red", r)?,
        check_channel("green", g)?,
        check_channel("blue", b)?,
    ];
    simulate(rgb, deficiency, severity, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let sim = Vec3::new(0.1, 0.2, 0.3);
        let orig = Vec3::new(0.9, 0.8, 0.7);
        assert_eq!(blend(sim, orig, 0.0), orig);
        assert_eq!(blend(sim, orig, 1.0), sim);
    }

    #[test]
    fn test_simulator_dispatch() {
        assert_eq!(simulator(Algorithm::Brettel1997).name(), "brettel1997");
        assert_eq!(simulator(Algorithm::Vienot1999).name(), "vienot1999");
    }

    #[test]
    fn test_checked_rejects_channels() {
        let err = simulate_checked(-1, 0, 0, Deficiency::Protan, 1.0, Algorithm::Brettel1997)
            .unwrap_err();
        assert!(err.is_out_of_range());
        assert!(err.to_string().contains("red"));

        let err = simulate_checked(0, 0, 256, Deficiency::Protan, 1.0, Algorithm::Vienot1999)
            .unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_rejects_severity() {
        for s in [-0.1, 1.1, f64::NAN] {
            let err = simulate([10, 20, 30], Deficiency::Tritan, s, Algorithm::Brettel1997)
                .unwrap_err();
            assert!(err.is_out_of_range());
        }
    }
}
