//! Side-by-side deficiency preview.

use crate::SimulateArgs;
use anyhow::Result;
use vtcolor_core::{Deficiency, DeficiencyConfig};

/// Runs the simulate command.
///
/// The original color is printed first, then the color under each
/// deficiency with the configured severity and algorithm.
pub fn run(args: SimulateArgs, config: &DeficiencyConfig, verbose: bool) -> Result<()> {
    let original = super::resolve_spec(&args.spec, &config.with_transform(false))?;

    println!(
        "{} ({}, severity {})",
        args.spec, config.algorithm, config.severity
    );
    print_row("original", &original, args.swatch);

    for deficiency in Deficiency::ALL {
        let simulated = config.with_transform(true).with_deficiency(deficiency);
        let color = super::resolve_spec(&args.spec, &simulated)?;
        print_row(deficiency.as_str(), &color, args.swatch);
        if verbose {
            println!("    {:?}", color.foreground_escape());
        }
    }
    Ok(())
}

fn print_row(label: &str, color: &vtcolor::Color, swatch: bool) {
    let sample = if swatch { color.paint(super::SWATCH) } else { String::new() };
    println!(
        "  {label:<9} {} {:<13} {:<6} {sample}",
        color.hex(),
        color.plain_sequence(),
        super::tone(color)
    );
}
