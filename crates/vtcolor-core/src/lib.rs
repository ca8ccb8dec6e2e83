//! # vtcolor-core
//!
//! Core types shared by every vtcolor crate.
//!
//! - [`Error`], [`Result`] - the error taxonomy (invalid specifier, out of range)
//! - [`Deficiency`], [`Algorithm`] - what to simulate and how
//! - [`DeficiencyConfig`] - the explicit configuration value read at each
//!   color construction
//! - [`BrightnessModel`], [`Brightness`] - bright/dark classification
//!
//! ## Crate Structure
//!
//! ```text
//! vtcolor-core (this crate)
//!    ^
//!    |
//!    +-- vtcolor-math (Vec3, Mat3)
//!    +-- vtcolor-transfer (sRGB gamma codec)
//!    +-- vtcolor-cvd (deficiency simulation)
//!    +-- vtcolor-palette (indexed palette lookup)
//!    +-- vtcolor (color resolver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod deficiency;
pub mod error;
pub mod luma;

pub use config::DeficiencyConfig;
pub use deficiency::{Algorithm, Deficiency};
pub use error::{Error, Result, check_channel, check_severity};
pub use luma::{Brightness, BrightnessModel, MIDPOINT, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
