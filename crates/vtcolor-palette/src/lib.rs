//! # vtcolor-palette
//!
//! Lookup from indexed terminal colors (0-255) to RGB.
//!
//! The resolver only needs the [`PaletteLookup`] interface; [`Xterm256`]
//! is the standard table most terminals ship with:
//!
//! | Range | Contents |
//! |-------|----------|
//! | 0-15 | 16 system colors |
//! | 16-231 | 6x6x6 cube, levels `[0, 95, 135, 175, 215, 255]` |
//! | 232-255 | 24 grays, `8 + 10 * k` |
//!
//! # Usage
//!
//! ```rust
//! use vtcolor_palette::{PaletteLookup, Xterm256};
//!
//! let entry = Xterm256.lookup(18);
//! assert_eq!(entry.rgb(), [0, 0, 135]);
//! assert_eq!(entry.name, "DarkBlue");
//! assert_eq!(Xterm256.find("DarkBlue"), Some(18));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::collections::HashMap;
use std::sync::OnceLock;

use vtcolor_core::{Brightness, BrightnessModel};

mod names;

pub use names::NAMES;

/// One palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Palette id.
    pub id: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Palette name.
    pub name: &'static str,
    /// Bright classification of the slot.
    pub is_bright: bool,
    /// Dark classification of the slot.
    pub is_dark: bool,
}

impl PaletteEntry {
    /// Channels as an array.
    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether the slot is one of the 16 system colors.
    #[inline]
    pub fn is_system(&self) -> bool {
        self.id < 16
    }
}

/// Maps palette ids to colors.
///
/// Implementations must be total over `0..=255` and stable: the same id
/// always yields the same entry.
pub trait PaletteLookup: Send + Sync {
    /// Entry for a palette id.
    fn lookup(&self, id: u8) -> PaletteEntry;

    /// Palette id for a name, if the name is known. Case-sensitive.
    fn find(&self, name: &str) -> Option<u8>;
}

/// The 16 system colors.
pub const SYSTEM_COLORS: [[u8; 3]; 16] = [
    [0, 0, 0],
    [128, 0, 0],
    [0, 128, 0],
    [128, 128, 0],
    [0, 0, 128],
    [128, 0, 128],
    [0, 128, 128],
    [192, 192, 192],
    [128, 128, 128],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Channel levels of the 6x6x6 cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB of a palette id in the xterm layout.
pub const fn xterm_rgb(id: u8) -> [u8; 3] {
    match id {
        0..=15 => SYSTEM_COLORS[id as usize],
        16..=231 => {
            let i = (id - 16) as usize;
            [CUBE_LEVELS[i / 36], CUBE_LEVELS[(i / 6) % 6], CUBE_LEVELS[i % 6]]
        }
        _ => {
            let v = 8 + (id - 232) * 10;
            [v, v, v]
        }
    }
}

/// The standard xterm 256-color palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xterm256;

fn name_index() -> &'static HashMap<&'static str, u8> {
    static INDEX: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
    INDEX.get_or_init(|| (0..=255u8).map(|id| (NAMES[id as usize], id)).collect())
}

impl PaletteLookup for Xterm256 {
    fn lookup(&self, id: u8) -> PaletteEntry {
        let [r, g, b] = xterm_rgb(id);
        let Brightness { is_bright, is_dark } = BrightnessModel::Legacy.classify([r, g, b]);
        PaletteEntry {
            id,
            r,
            g,
            b,
            name: NAMES[id as usize],
            is_bright,
            is_dark,
        }
    }

    fn find(&self, name: &str) -> Option<u8> {
        name_index().get(name).copied()
    }
}
