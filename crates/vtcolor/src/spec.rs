//! Color specifier parsing.
//!
//! Every entry point funnels into [`ColorSpec`]. String input is parsed
//! once here; the typed constructors on [`Color`](crate::Color) build the
//! matching variant directly.
//!
//! Shapes are tried in a fixed order after all `"` characters are removed:
//!
//! 1. anything containing `;` is a triplet `r;g;b`
//! 2. a decimal number is a palette index
//! 3. `#` followed by six hex digits is a hex color
//! 4. a word of letters, digits and `_` is a palette name, checked at
//!    resolution

use std::fmt;
use std::str::FromStr;

use vtcolor_core::{Error, Result};

/// A parsed color specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// Palette index.
    Index(u8),
    /// Palette name, case-sensitive.
    Name(String),
    /// Explicit channels.
    Rgb(u8, u8, u8),
    /// Packed `0xRRGGBB`.
    Hex(u32),
}

impl ColorSpec {
    /// Parses a specifier string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpecifier`] when the input is empty, a
    /// triplet is malformed, a number is above 255, a `#` form is not six
    /// hex digits, or the input is none of the shapes (`18.0`, `Red-ish`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vtcolor::ColorSpec;
    ///
    /// assert_eq!(ColorSpec::parse("\"94;0;63\"").unwrap(), ColorSpec::Rgb(94, 0, 63));
    /// assert_eq!(ColorSpec::parse("18").unwrap(), ColorSpec::Index(18));
    /// assert_eq!(ColorSpec::parse("#0F0F0F").unwrap(), ColorSpec::Hex(0x0F0F0F));
    /// assert!(ColorSpec::parse("1;2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let spec = strip_quotes(input);

        if spec.contains(';') {
            return parse_triplet(&spec);
        }
        if is_decimal(&spec) {
            return parse_index(&spec);
        }
        let trimmed = spec.trim();
        if trimmed.starts_with('#') {
            return parse_hex(trimmed);
        }
        if trimmed.is_empty() {
            return Err(Error::invalid_specifier(spec, "empty specifier"));
        }
        if !is_name(trimmed) {
            return Err(Error::invalid_specifier(
                spec,
                "not a palette index, name, r;g;b triplet or #RRGGBB color",
            ));
        }
        Ok(Self::Name(trimmed.to_owned()))
    }

    /// Parses a `#RRGGBB` specifier and nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpecifier`] if the input is not a hex color.
    pub fn parse_hex(input: &str) -> Result<Self> {
        parse_hex(&strip_quotes(input))
    }

    /// Channels of a hex or triplet specifier.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        match *self {
            Self::Rgb(r, g, b) => Some([r, g, b]),
            Self::Hex(v) => Some(unpack(v)),
            Self::Index(_) | Self::Name(_) => None,
        }
    }
}

impl FromStr for ColorSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
            Self::Rgb(r, g, b) => write!(f, "{r};{g};{b}"),
            Self::Hex(v) => write!(f, "#{v:06X}"),
        }
    }
}

/// Splits `0xRRGGBB` into channels.
#[inline]
pub const fn unpack(v: u32) -> [u8; 3] {
    [(v >> 16) as u8, (v >> 8) as u8, v as u8]
}

fn strip_quotes(input: &str) -> String {
    input.replace('"', "")
}

fn is_decimal(s: &str) -> bool {
    let s = s.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_name(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn parse_index(spec: &str) -> Result<ColorSpec> {
    spec.trim()
        .parse::<u8>()
        .map(ColorSpec::Index)
        .map_err(|_| Error::invalid_specifier(spec, "palette index must be in [0, 255]"))
}

fn parse_triplet(spec: &str) -> Result<ColorSpec> {
    let fields: Vec<&str> = spec.split(';').collect();
    if fields.len() != 3 {
        return Err(Error::invalid_specifier(
            spec,
            format!("expected 3 fields, got {}", fields.len()),
        ));
    }

    let mut rgb = [0u8; 3];
    for ((slot, field), name) in rgb.iter_mut().zip(&fields).zip(["red", "green", "blue"]) {
        let field = field.trim();
        if !is_decimal(field) {
            return Err(Error::invalid_specifier(spec, format!("{name} is not a number")));
        }
        *slot = field.parse::<u8>().map_err(|_| {
            Error::invalid_specifier(spec, format!("{name} must be in [0, 255], got {field}"))
        })?;
    }
    let [r, g, b] = rgb;
    Ok(ColorSpec::Rgb(r, g, b))
}

fn parse_hex(spec: &str) -> Result<ColorSpec> {
    let digits = spec
        .strip_prefix('#')
        .ok_or_else(|| Error::invalid_specifier(spec, "hex color must start with '#'"))?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_specifier(spec, "expected '#' and 6 hex digits"));
    }
    u32::from_str_radix(digits, 16)
        .map(ColorSpec::Hex)
        .map_err(|e| Error::invalid_specifier(spec, e.to_string()))
}
