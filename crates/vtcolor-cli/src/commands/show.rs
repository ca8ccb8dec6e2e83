//! Resolve command.
//!
//! Prints every derived property of each color, as text or JSON.

use crate::ShowArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use vtcolor::Color;
use vtcolor_core::DeficiencyConfig;

/// One resolved input, as written to JSON.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    color: &'a Color,
}

/// Runs the show command.
pub fn run(args: ShowArgs, config: &DeficiencyConfig, verbose: bool) -> Result<()> {
    let colors = args
        .specs
        .iter()
        .map(|spec| super::resolve_spec(spec, config))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let reports: Vec<Report<'_>> = args
            .specs
            .iter()
            .zip(&colors)
            .map(|(input, color)| Report { input: input.as_str(), color })
            .collect();
        let json = serde_json::to_string_pretty(&reports).context("Failed to encode JSON")?;
        println!("{json}");
        return Ok(());
    }

    for (i, (spec, color)) in args.specs.iter().zip(&colors).enumerate() {
        if i > 0 {
            println!();
        }
        print_text(spec, color, args.swatch, verbose);
    }
    Ok(())
}

fn print_text(spec: &str, color: &Color, swatch: bool, verbose: bool) {
    println!("{spec}");
    println!("  Kind:       {:?}", color.kind());
    println!("  RGB:        {} {} {}", color.r(), color.g(), color.b());
    println!("  Hex:        {}", color.hex());
    println!("  Plain:      {}", color.plain_sequence_enclosed());
    println!("  Tone:       {}", super::tone(color));
    if let Some(id) = color.palette_id() {
        println!("  Palette id: {id}");
    }
    if verbose {
        println!("  Foreground: {:?}", color.foreground_escape());
        println!("  Background: {:?}", color.background_escape());
    }
    if swatch {
        println!("  Swatch:     {}", color.paint(super::SWATCH));
    }
}
