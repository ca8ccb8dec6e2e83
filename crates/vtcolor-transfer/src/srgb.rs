//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - [`eotf`], [`oetf`]: [0, 1] <-> [0, 1]
//! - [`to_linear`]: 8-bit channel -> [0, 1]
//! - [`to_srgb`]: [0, 1] -> 8-bit channel, clamped
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use vtcolor_core::{Result, check_channel};

/// Encoded value below which the EOTF is linear.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Linear value below which the OETF is linear.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use vtcolor_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(GAMMA)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * LINEAR_SLOPE
    } else {
        1.055 * l.powf(1.0 / GAMMA) - 0.055
    }
}

/// Decodes an 8-bit sRGB channel to linear light in [0, 1].
///
/// # Example
///
/// ```rust
/// use vtcolor_transfer::srgb::to_linear;
///
/// assert_eq!(to_linear(0), 0.0);
/// assert_eq!(to_linear(255), 1.0);
/// ```
#[inline]
pub fn to_linear(c: u8) -> f64 {
    eotf(f64::from(c) / 255.0)
}

/// Decodes an integer sRGB channel, rejecting values outside [0, 255].
///
/// # Errors
///
/// Returns [`vtcolor_core::Error::OutOfRange`] for out-of-range channels.
#[inline]
pub fn to_linear_checked(what: &'static str, c: i32) -> Result<f64> {
    check_channel(what, c).map(to_linear)
}

/// Encodes linear light to an 8-bit sRGB channel.
///
/// Out-of-gamut input is clamped: anything `<= 0` (and NaN) maps to 0,
/// anything `>= 1` to 255. Inside the linear toe the encoded value is
/// rounded to nearest; on the power segment it is truncated toward zero.
///
/// # Example
///
/// ```rust
/// use vtcolor_transfer::srgb::{to_linear, to_srgb};
///
/// assert_eq!(to_srgb(-0.2), 0);
/// assert_eq!(to_srgb(1.7), 255);
/// assert_eq!(to_srgb(to_linear(135)), 135);
/// ```
#[inline]
pub fn to_srgb(l: f64) -> u8 {
    if l.is_nan() || l <= 0.0 {
        return 0;
    }
    if l >= 1.0 {
        return 255;
    }
    if l < LINEAR_BREAK {
        (l * LINEAR_SLOPE * 255.0).round() as u8
    } else {
        (255.0 * (l.powf(1.0 / GAMMA) * 1.055 - 0.055)) as u8
    }
}

/// Applies [`to_linear`] to an RGB triplet.
#[inline]
pub fn to_linear_rgb(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(to_linear)
}

/// Applies [`to_srgb`] to an RGB triplet.
#[inline]
pub fn to_srgb_rgb(rgb: [f64; 3]) -> [u8; 3] {
    rgb.map(to_srgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_float() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-9, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_8bit_within_one() {
        for x in 0..=255u8 {
            let back = to_srgb(to_linear(x));
            assert!(
                (i32::from(back) - i32::from(x)).abs() <= 1,
                "x={}, back={}",
                x,
                back
            );
        }
    }

    #[test]
    fn test_quantizer_clamps() {
        assert_eq!(to_srgb(f64::NAN), 0);
        assert_eq!(to_srgb(-1.0), 0);
        assert_eq!(to_srgb(0.0), 0);
        assert_eq!(to_srgb(1.0), 255);
        assert_eq!(to_srgb(2.0), 255);
    }

    #[test]
    fn test_quantizer_truncates_power_segment() {
        // encodes to 24.5078..., kept as 24
        let l = 0.03892 * to_linear(135);
        assert_eq!(to_srgb(l), 24);
    }

    #[test]
    fn test_quantizer_rounds_linear_toe() {
        // 0.001 * 12.92 * 255 = 3.29..
        assert_eq!(to_srgb(0.001), 3);
        // 0.0025 * 12.92 * 255 = 8.2365
        assert_eq!(to_srgb(0.0025), 8);
        // 0.0028 * 12.92 * 255 = 9.22..
        assert_eq!(to_srgb(0.0028), 9);
    }

    #[test]
    fn test_checked() {
        assert_eq!(to_linear_checked("red", 255), Ok(1.0));
        assert!(to_linear_checked("red", 256).is_err());
        assert!(to_linear_checked("red", -1).is_err());
    }
}
