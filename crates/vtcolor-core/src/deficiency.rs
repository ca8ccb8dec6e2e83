//! Color vision deficiency kinds and simulation algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Dichromatic color vision deficiency.
///
/// | Kind | Missing/affected cone | Common name |
/// |------|-----------------------|-------------|
/// | [`Protan`](Deficiency::Protan) | L (long, red) | red-blind |
/// | [`Deutan`](Deficiency::Deutan) | M (medium, green) | green-blind |
/// | [`Tritan`](Deficiency::Tritan) | S (short, blue) | blue-yellow |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deficiency {
    /// Red cone deficiency (protanopia / protanomaly).
    #[default]
    Protan,
    /// Green cone deficiency (deuteranopia / deuteranomaly).
    Deutan,
    /// Blue cone deficiency (tritanopia / tritanomaly).
    Tritan,
}

impl Deficiency {
    /// All deficiency kinds, in canonical order.
    pub const ALL: [Self; 3] = [Self::Protan, Self::Deutan, Self::Tritan];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protan => "protan",
            Self::Deutan => "deutan",
            Self::Tritan => "tritan",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deficiency {
    type Err = Error;

    /// Parses `protan`, `deutan`, `tritan` (case-insensitive), also
    /// accepting the `-opia` / `-omaly` clinical spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "protan" | "protanopia" | "protanomaly" => Ok(Self::Protan),
            "deutan" | "deuteranopia" | "deuteranomaly" => Ok(Self::Deutan),
            "tritan" | "tritanopia" | "tritanomaly" => Ok(Self::Tritan),
            _ => Err(Error::invalid_specifier(
                s,
                "expected one of protan, deutan, tritan",
            )),
        }
    }
}

/// Simulation algorithm.
///
/// - [`Brettel1997`](Algorithm::Brettel1997) - two half-planes, each with
///   its own linear operator. Accurate for all three deficiencies.
/// - [`Vienot1999`](Algorithm::Vienot1999) - the "simple" algorithm: a
///   single global matrix per deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Brettel, Viénot & Mollon (1997).
    #[default]
    Brettel1997,
    /// Viénot, Brettel & Mollon (1999).
    Vienot1999,
}

impl Algorithm {
    /// Returns `true` for the single-matrix algorithm.
    #[inline]
    pub fn is_simple(self) -> bool {
        self == Self::Vienot1999
    }

    /// Maps the "use simple algorithm" switch to an algorithm.
    #[inline]
    pub fn from_simple(simple: bool) -> Self {
        if simple { Self::Vienot1999 } else { Self::Brettel1997 }
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brettel1997 => "brettel1997",
            Self::Vienot1999 => "vienot1999",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brettel" | "brettel1997" => Ok(Self::Brettel1997),
            "vienot" | "vienot1999" | "simple" => Ok(Self::Vienot1999),
            _ => Err(Error::invalid_specifier(
                s,
                "expected brettel1997 or vienot1999",
            )),
        }
    }
}
