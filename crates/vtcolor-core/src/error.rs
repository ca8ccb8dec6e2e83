//! Error types for vtcolor operations.
//!
//! Every failure in the workspace is a local validation failure surfaced
//! synchronously to the caller. There are two categories:
//!
//! - [`Error::InvalidSpecifier`] - the input string matches none of the
//!   accepted color specifier shapes (or a shape with bad contents)
//! - [`Error::OutOfRange`] - a numeric channel or severity value lies
//!   outside its valid interval
//!
//! No partial color is ever produced alongside an error.
//!
//! # Usage
//!
//! ```rust
//! use vtcolor_core::{Error, Result};
//!
//! fn check_channel(name: &'static str, v: i32) -> Result<u8> {
//!     u8::try_from(v).map_err(|_| Error::channel_out_of_range(name, v))
//! }
//!
//! assert!(check_channel("red", 300).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or transforming a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The specifier does not match any accepted shape.
    ///
    /// Accepted shapes are `<0-255>`, a palette name, `<r>;<g>;<b>` and
    /// `#RRGGBB`. The `reason` names the part that failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vtcolor_core::Error;
    ///
    /// let err = Error::invalid_specifier("1;2", "expected 3 fields, got 2");
    /// assert!(err.to_string().contains("1;2"));
    /// ```
    #[error("invalid color specifier {spec:?}: {reason}")]
    InvalidSpecifier {
        /// Specifier as given by the caller (after quote stripping)
        spec: String,
        /// What was wrong with it
        reason: String,
    },

    /// A value is outside its valid interval.
    ///
    /// Used for RGB channels (`[0, 255]`) and severity (`[0.0, 1.0]`).
    #[error("{what} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending value ("red", "severity", ...)
        what: &'static str,
        /// The rejected value, formatted
        value: String,
        /// Lower bound (inclusive)
        min: String,
        /// Upper bound (inclusive)
        max: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidSpecifier`] error.
    #[inline]
    pub fn invalid_specifier(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpecifier {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfRange`] error for an 8-bit channel.
    #[inline]
    pub fn channel_out_of_range(what: &'static str, value: i32) -> Self {
        Self::OutOfRange {
            what,
            value: value.to_string(),
            min: "0".into(),
            max: "255".into(),
        }
    }

    /// Creates an [`Error::OutOfRange`] error for a severity value.
    #[inline]
    pub fn severity_out_of_range(value: f64) -> Self {
        Self::OutOfRange {
            what: "severity",
            value: value.to_string(),
            min: "0.0".into(),
            max: "1.0".into(),
        }
    }

    /// Returns `true` if this is a specifier parse error.
    #[inline]
    pub fn is_invalid_specifier(&self) -> bool {
        matches!(self, Self::InvalidSpecifier { .. })
    }

    /// Returns `true` if this is a range error.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Validates an integer channel and narrows it to `u8`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `value` is outside `[0, 255]`.
#[inline]
pub fn check_channel(what: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::channel_out_of_range(what, value))
}

/// Validates a severity value.
///
/// NaN is rejected along with values outside `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for anything outside the unit interval.
#[inline]
pub fn check_severity(severity: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&severity) {
        Ok(severity)
    } else {
        Err(Error::severity_out_of_range(severity))
    }
}
