//! CLI command implementations

pub mod palette;
pub mod show;
pub mod simulate;

use anyhow::{Context, Result};
use vtcolor::{Color, resolve};
use vtcolor_core::DeficiencyConfig;

/// Sample text for swatches.
pub const SWATCH: &str = "\u{2588}\u{2588}\u{2588}\u{2588}";

/// Resolves a specifier, naming it in the error.
pub fn resolve_spec(spec: &str, config: &DeficiencyConfig) -> Result<Color> {
    resolve(spec, config).with_context(|| format!("Failed to resolve: {spec}"))
}

/// Short bright/dark label.
pub fn tone(color: &Color) -> &'static str {
    if color.is_bright() {
        "bright"
    } else if color.is_dark() {
        "dark"
    } else {
        "mid"
    }
}
