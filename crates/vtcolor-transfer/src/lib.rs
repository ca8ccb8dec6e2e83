//! # vtcolor-transfer
//!
//! The sRGB transfer function pair and its 8-bit quantizer.
//!
//! Deficiency simulation happens in linear light, so every 8-bit channel
//! is decoded with the sRGB EOTF first and encoded back with the OETF
//! afterwards.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Usage
//!
//! ```rust
//! use vtcolor_transfer::srgb;
//!
//! // 8-bit channel to linear light
//! let linear = srgb::to_linear(128);
//!
//! // and back
//! assert_eq!(srgb::to_srgb(linear), 128);
//! ```
//!
//! # Used By
//!
//! - `vtcolor-cvd` - decode before and encode after simulation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

