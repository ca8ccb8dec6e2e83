//! Deficiency settings: YAML file first, then command-line overrides.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vtcolor_core::{Algorithm, DeficiencyConfig};

use crate::ConfigArgs;

/// Builds the effective configuration.
///
/// Giving a deficiency on the command line turns the transform on.
pub fn load(args: &ConfigArgs) -> Result<DeficiencyConfig> {
    let base = match &args.config {
        Some(path) => read_yaml(path)?,
        None => DeficiencyConfig::default(),
    };
    let config = apply(base, args);
    config.validate().context("Invalid deficiency settings")?;
    Ok(config)
}

fn read_yaml(path: &Path) -> Result<DeficiencyConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_yaml(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn parse_yaml(text: &str) -> Result<DeficiencyConfig> {
    Ok(serde_yaml::from_str(text)?)
}

fn apply(mut config: DeficiencyConfig, args: &ConfigArgs) -> DeficiencyConfig {
    if let Some(deficiency) = args.deficiency {
        config = config.with_transform(true).with_deficiency(deficiency);
    }
    if let Some(severity) = args.severity {
        config = config.with_severity(severity);
    }
    if args.simple {
        config = config.with_algorithm(Algorithm::Vienot1999);
    }
    if let Some(brightness) = args.brightness {
        config = config.with_brightness(brightness);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtcolor_core::{BrightnessModel, Deficiency};

    #[test]
    fn test_yaml_partial() {
        let c = parse_yaml("transform_enabled: true\ndeficiency: tritan\n").unwrap();
        assert!(c.transform_enabled);
        assert_eq!(c.deficiency, Deficiency::Tritan);
        assert_eq!(c.severity, DeficiencyConfig::default().severity);
    }

    #[test]
    fn test_yaml_rejects_unknown_deficiency() {
        assert!(parse_yaml("deficiency: achromat\n").is_err());
    }

    #[test]
    fn test_flags_override() {
        let args = ConfigArgs {
            deficiency: Some(Deficiency::Deutan),
            severity: Some(1.0),
            simple: true,
            brightness: Some(BrightnessModel::Rec709),
            ..Default::default()
        };
        let c = apply(DeficiencyConfig::default(), &args);
        assert!(c.transform_enabled);
        assert_eq!(c.deficiency, Deficiency::Deutan);
        assert_eq!(c.severity, 1.0);
        assert!(c.use_simple_algorithm());
        assert_eq!(c.brightness, BrightnessModel::Rec709);
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let base = DeficiencyConfig::simulating(Deficiency::Tritan);
        assert_eq!(apply(base, &ConfigArgs::default()), base);
    }

    #[test]
    fn test_bad_severity_rejected() {
        let args = ConfigArgs {
            severity: Some(2.0),
            ..Default::default()
        };
        assert!(load(&args).is_err());
    }
}
