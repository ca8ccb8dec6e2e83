//! Bright/dark classification of 8-bit RGB colors.
//!
//! A color is bright when its luma is above the midpoint `255 / 2`, dark
//! when below, and neither when exactly on it.
//!
//! Two luma models exist. [`BrightnessModel::Legacy`] is the default and
//! sums the raw channels with the Rec.709 coefficients *added* rather than
//! multiplied. That is almost certainly an arithmetic slip in the formula
//! it reproduces, but colors already classified with it (for example the
//! palette entry `18`, pure navy, which counts as bright) keep their
//! classification. [`BrightnessModel::Rec709`] is the weighted sum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Rec.709 luma coefficient for the red channel.
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luma coefficient for the green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luma coefficient for the blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Bright/dark threshold in 8-bit channel units.
pub const MIDPOINT: f64 = 255.0 / 2.0;

/// How luma is computed for the bright/dark classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessModel {
    /// `r + 0.2126 + g + 0.7152 + b + 0.0722`.
    #[default]
    Legacy,
    /// `r * 0.2126 + g * 0.7152 + b * 0.0722`.
    Rec709,
}

impl BrightnessModel {
    /// Luma of an 8-bit color, in channel units.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vtcolor_core::BrightnessModel;
    ///
    /// let navy = [0, 0, 135];
    /// assert!(BrightnessModel::Legacy.luma(navy) > 127.5);
    /// assert!(BrightnessModel::Rec709.luma(navy) < 127.5);
    /// ```
    pub fn luma(self, rgb: [u8; 3]) -> f64 {
        let [r, g, b] = rgb.map(f64::from);
        match self {
            Self::Legacy => r + REC709_LUMA_R + g + REC709_LUMA_G + b + REC709_LUMA_B,
            Self::Rec709 => r * REC709_LUMA_R + g * REC709_LUMA_G + b * REC709_LUMA_B,
        }
    }

    /// Classifies a color.
    pub fn classify(self, rgb: [u8; 3]) -> Brightness {
        Brightness::from_luma(self.luma(rgb))
    }
}

impl fmt::Display for BrightnessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Legacy => "legacy",
            Self::Rec709 => "rec709",
        })
    }
}

impl FromStr for BrightnessModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "rec709" | "bt709" => Ok(Self::Rec709),
            _ => Err(Error::invalid_specifier(s, "expected legacy or rec709")),
        }
    }
}

/// Result of the bright/dark classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brightness {
    /// Luma above the midpoint.
    pub is_bright: bool,
    /// Luma below the midpoint.
    pub is_dark: bool,
}

impl Brightness {
    /// Classifies a luma value against [`MIDPOINT`].
    #[inline]
    pub fn from_luma(luma: f64) -> Self {
        Self {
            is_bright: luma > MIDPOINT,
            is_dark: luma < MIDPOINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_reference_colors() {
        // 94;0;63 is bright under the additive formula
        let b = BrightnessModel::Legacy.classify([94, 0, 63]);
        assert!(b.is_bright && !b.is_dark);

        let b = BrightnessModel::Legacy.classify([15, 15, 15]);
        assert!(b.is_dark && !b.is_bright);
    }

    #[test]
    fn test_rec709_weighted() {
        let b = BrightnessModel::Rec709.classify([94, 0, 63]);
        assert!(b.is_dark);

        let b = BrightnessModel::Rec709.classify([255, 255, 255]);
        assert!(b.is_bright);
    }

    #[test]
    fn test_parse_model() {
        assert_eq!("Rec709".parse::<BrightnessModel>(), Ok(BrightnessModel::Rec709));
        assert_eq!("legacy".parse::<BrightnessModel>(), Ok(BrightnessModel::Legacy));
        assert!("luma".parse::<BrightnessModel>().is_err());
        assert_eq!(BrightnessModel::Rec709.to_string(), "rec709");
    }

    #[test]
    fn test_midpoint_is_neither() {
        let b = Brightness::from_luma(MIDPOINT);
        assert!(!b.is_bright);
        assert!(!b.is_dark);
    }

    #[test]
    fn test_mutually_exclusive() {
        for v in (0..=255u8).step_by(5) {
            for model in [BrightnessModel::Legacy, BrightnessModel::Rec709] {
                let b = model.classify([v, v, v]);
                assert!(!(b.is_bright && b.is_dark));
            }
        }
    }
}
