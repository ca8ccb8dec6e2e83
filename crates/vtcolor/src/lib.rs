//! # vtcolor
//!
//! Resolves terminal color specifiers into immutable [`Color`] values,
//! optionally simulating a color vision deficiency on the way.
//!
//! Accepted specifiers (all `"` characters are ignored):
//!
//! | Shape | Example | Kind |
//! |-------|---------|------|
//! | palette index | `18` | [`ColorKind::Indexed16`] / [`ColorKind::Indexed255`] |
//! | palette name | `DarkBlue` | same as index |
//! | triplet | `94;0;63` | [`ColorKind::TrueColor`] |
//! | hex | `#5E003F` | [`ColorKind::TrueColor`] |
//!
//! Configuration is an explicit [`DeficiencyConfig`] value passed to each
//! construction. With the transform enabled every color comes out as a
//! true color carrying the simulated channels.
//!
//! # Usage
//!
//! ```rust
//! use vtcolor::{Color, resolve};
//! use vtcolor_core::DeficiencyConfig;
//!
//! let c = resolve("\"94;0;63\"", &DeficiencyConfig::default()).unwrap();
//! assert_eq!(c.hex(), "#5E003F");
//! assert_eq!(c.foreground_escape(), "\x1b[38;2;94;0;63m");
//! assert!(c.is_bright());
//!
//! assert_eq!(Color::empty().plain_sequence(), "0");
//! ```
//!
//! # Dependencies
//!
//! - `vtcolor-palette` - indexed color lookup
//! - `vtcolor-cvd` - deficiency simulation
//! - [`serde`] - `Color` serializes for reports
//! - [`tracing`] - resolution events

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
pub mod escape;
mod resolve;
mod spec;

pub use color::{Color, ColorKind};
pub use resolve::{resolve, resolve_with};
pub use spec::{ColorSpec, unpack};

pub use vtcolor_core::{
    Algorithm, BrightnessModel, Deficiency, DeficiencyConfig, Error, Result,
};
pub use vtcolor_palette::{PaletteEntry, PaletteLookup, Xterm256};
