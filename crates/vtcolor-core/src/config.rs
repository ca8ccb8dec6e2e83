//! Deficiency simulation settings.
//!
//! [`DeficiencyConfig`] is passed by reference into every color
//! construction. It is a plain value: build one, then resolve as many
//! colors as needed against it.
//!
//! # Example
//!
//! ```rust
//! use vtcolor_core::{DeficiencyConfig, Deficiency};
//!
//! let config = DeficiencyConfig::simulating(Deficiency::Deutan)
//!     .with_severity(0.6)
//!     .with_simple_algorithm(true);
//!
//! assert!(config.transform_enabled);
//! assert!(config.use_simple_algorithm());
//! ```
//!
//! # Serialized form
//!
//! ```yaml
//! transform_enabled: true
//! algorithm: brettel1997
//! deficiency: tritan
//! severity: 0.8
//! brightness: legacy
//! ```
//!
//! Missing fields take their [`Default`] values.

use serde::{Deserialize, Serialize};

use crate::{Algorithm, BrightnessModel, Deficiency, Result, check_severity};

/// Settings read at each color construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeficiencyConfig {
    /// When false, no simulation is applied regardless of other settings.
    pub transform_enabled: bool,
    /// Simulation algorithm.
    pub algorithm: Algorithm,
    /// Deficiency to simulate.
    pub deficiency: Deficiency,
    /// Blend factor in `[0, 1]`; 0 leaves colors untouched.
    pub severity: f64,
    /// Luma model for the bright/dark classification.
    pub brightness: BrightnessModel,
}

impl Default for DeficiencyConfig {
    fn default() -> Self {
        Self {
            transform_enabled: false,
            algorithm: Algorithm::Brettel1997,
            deficiency: Deficiency::Protan,
            severity: 0.6,
            brightness: BrightnessModel::Legacy,
        }
    }
}

impl DeficiencyConfig {
    /// Configuration with simulation disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-severity simulation of `deficiency` with the Brettel algorithm.
    pub fn simulating(deficiency: Deficiency) -> Self {
        Self {
            transform_enabled: true,
            deficiency,
            severity: 1.0,
            ..Self::default()
        }
    }

    /// Sets the transform switch.
    #[must_use]
    pub fn with_transform(mut self, enabled: bool) -> Self {
        self.transform_enabled = enabled;
        self
    }

    /// Sets the deficiency kind.
    #[must_use]
    pub fn with_deficiency(mut self, deficiency: Deficiency) -> Self {
        self.deficiency = deficiency;
        self
    }

    /// Sets the severity. Range is checked by [`validate`](Self::validate)
    /// and again when a transform runs.
    #[must_use]
    pub fn with_severity(mut self, severity: f64) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Selects the simple (single-matrix) algorithm when `simple` is true.
    #[must_use]
    pub fn with_simple_algorithm(self, simple: bool) -> Self {
        self.with_algorithm(Algorithm::from_simple(simple))
    }

    /// Sets the brightness model.
    #[must_use]
    pub fn with_brightness(mut self, brightness: BrightnessModel) -> Self {
        self.brightness = brightness;
        self
    }

    /// Whether the simple algorithm is selected.
    #[inline]
    pub fn use_simple_algorithm(&self) -> bool {
        self.algorithm.is_simple()
    }

    /// Checks the severity range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) when severity
    /// is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_severity(self.severity).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let c = DeficiencyConfig::default();
        assert!(!c.transform_enabled);
        assert!(!c.use_simple_algorithm());
        assert_eq!(c.brightness, BrightnessModel::Legacy);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = DeficiencyConfig::new()
            .with_transform(true)
            .with_deficiency(Deficiency::Tritan)
            .with_severity(0.25)
            .with_simple_algorithm(true);
        assert!(c.transform_enabled);
        assert_eq!(c.deficiency, Deficiency::Tritan);
        assert_eq!(c.severity, 0.25);
        assert_eq!(c.algorithm, Algorithm::Vienot1999);
    }

    #[test]
    fn test_validate_rejects_bad_severity() {
        let c = DeficiencyConfig::simulating(Deficiency::Protan).with_severity(1.5);
        assert!(c.validate().unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_yaml_partial() {
        let yaml = "transform_enabled: true\ndeficiency: deutan\n";
        let c: DeficiencyConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(c.transform_enabled);
        assert_eq!(c.deficiency, Deficiency::Deutan);
        assert_eq!(c.algorithm, Algorithm::Brettel1997);
        assert_eq!(c.severity, DeficiencyConfig::default().severity);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let c = DeficiencyConfig::simulating(Deficiency::Tritan)
            .with_brightness(BrightnessModel::Rec709);
        let text = serde_yaml::to_string(&c).unwrap();
        assert!(text.contains("rec709"));
        let back: DeficiencyConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, c);
    }
}
