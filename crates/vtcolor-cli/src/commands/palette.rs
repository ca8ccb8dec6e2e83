//! Palette listing.

use crate::PaletteArgs;
use anyhow::Result;
use vtcolor::Color;
use vtcolor_core::DeficiencyConfig;
use vtcolor_palette::{PaletteLookup, Xterm256};

/// Runs the palette command.
///
/// Entries are always listed untransformed.
pub fn run(args: PaletteArgs, verbose: bool) -> Result<()> {
    let plain = DeficiencyConfig::default();
    for id in 0..=255u8 {
        let entry = Xterm256.lookup(id);
        let color = Color::from_index(id, &plain)?;

        let mut line = format!("{id:>3}  {}  {:<6}", color.hex(), super::tone(&color));
        if args.names {
            line.push_str(&format!("  {:<20}", entry.name));
        }
        if verbose {
            line.push_str(&format!("  {:?}", color.kind()));
        }
        if args.swatch {
            line.push_str("  ");
            line.push_str(&color.paint(super::SWATCH));
        }
        println!("{}", line.trim_end());
    }
    Ok(())
}
