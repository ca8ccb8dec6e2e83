//! String entry points.

use tracing::trace;
use vtcolor_core::{DeficiencyConfig, Result};
use vtcolor_palette::{PaletteLookup, Xterm256};

use crate::{Color, ColorSpec};

/// Resolves a specifier against the xterm palette.
///
/// # Errors
///
/// - [`Error::InvalidSpecifier`](vtcolor_core::Error::InvalidSpecifier) when
///   the input matches no specifier shape or names an unknown color
/// - [`Error::OutOfRange`](vtcolor_core::Error::OutOfRange) when the
///   transform is enabled with a severity outside `[0, 1]`
///
/// # Example
///
/// ```rust
/// use vtcolor::{ColorKind, resolve};
/// use vtcolor_core::{DeficiencyConfig, Deficiency};
///
/// let config = DeficiencyConfig::simulating(Deficiency::Protan);
/// let c = resolve("18", &config).unwrap();
/// assert_eq!(c.kind(), ColorKind::TrueColor);
/// assert_eq!(c.hex(), "#001887");
/// ```
pub fn resolve(spec: &str, config: &DeficiencyConfig) -> Result<Color> {
    resolve_with(spec, config, &Xterm256)
}

/// Resolves a specifier against a caller-supplied palette.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with(
    spec: &str,
    config: &DeficiencyConfig,
    palette: &dyn PaletteLookup,
) -> Result<Color> {
    let parsed = ColorSpec::parse(spec)?;
    trace!(input = spec, ?parsed, "resolve");
    Color::from_spec(&parsed, config, palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtcolor_palette::PaletteEntry;

    /// Every slot is mid gray, only "Accent" is named.
    struct GrayPalette;

    impl PaletteLookup for GrayPalette {
        fn lookup(&self, id: u8) -> PaletteEntry {
            PaletteEntry {
                id,
                r: 128,
                g: 128,
                b: 128,
                name: "Gray",
                is_bright: true,
                is_dark: false,
            }
        }

        fn find(&self, name: &str) -> Option<u8> {
            (name == "Accent").then_some(200)
        }
    }

    #[test]
    fn test_custom_palette() {
        let config = DeficiencyConfig::default();
        let c = resolve_with("Accent", &config, &GrayPalette).unwrap();
        assert_eq!(c.indexed255_id(), Some(200));
        assert_eq!(c.hex(), "#808080");

        assert!(resolve_with("Red", &config, &GrayPalette).is_err());
        assert_eq!(resolve_with("3", &config, &GrayPalette).unwrap().rgb(), [128, 128, 128]);
    }

    #[test]
    fn test_bad_severity_fails() {
        let config = DeficiencyConfig::default().with_transform(true).with_severity(1.5);
        assert!(resolve("18", &config).unwrap_err().is_out_of_range());

        // untransformed colors ignore severity
        let config = config.with_transform(false);
        assert!(resolve("18", &config).is_ok());
    }
}
