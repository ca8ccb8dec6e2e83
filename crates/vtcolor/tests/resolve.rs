//! End-to-end resolution tests.

use vtcolor::{Color, ColorKind, resolve};
use vtcolor_core::{Algorithm, BrightnessModel, Deficiency, DeficiencyConfig};

fn plain() -> DeficiencyConfig {
    DeficiencyConfig::default()
}

#[test]
fn palette_18() {
    let c = resolve("18", &plain()).unwrap();
    assert_eq!(c.rgb(), [0, 0, 135]);
    assert_eq!(c.kind(), ColorKind::Indexed255);
    assert_eq!(c.hex(), "#000087");
    assert_eq!(c.plain_sequence(), "18");
    assert_eq!(c.plain_sequence_enclosed(), "18");
    assert_eq!(c.foreground_escape(), "\x1b[38;5;18m");
    assert_eq!(c.background_escape(), "\x1b[48;5;18m");
    assert_eq!(c.indexed255_id(), Some(18));
    assert_eq!(c.index16_id(), None);
    assert!(c.is_bright());
    assert!(!c.is_dark());
}

#[test]
fn palette_13() {
    let c = resolve("13", &plain()).unwrap();
    assert_eq!(c.kind(), ColorKind::Indexed16);
    assert_eq!(c.hex(), "#FF00FF");
    assert_eq!(c.index16_id(), Some(13));
    assert_eq!(c.indexed255_id(), None);
}

#[test]
fn triplet_94_0_63() {
    let c = resolve("94;0;63", &plain()).unwrap();
    assert_eq!(c.kind(), ColorKind::TrueColor);
    assert_eq!(c.hex(), "#5E003F");
    assert_eq!(c.plain_sequence(), "94;0;63");
    assert_eq!(c.plain_sequence_enclosed(), "\"94;0;63\"");
    assert_eq!(c.foreground_escape(), "\x1b[38;2;94;0;63m");
    assert_eq!(c.background_escape(), "\x1b[48;2;94;0;63m");
    assert!(c.is_bright());
    assert_eq!(c.palette_id(), None);
}

#[test]
fn quoted_triplet() {
    let quoted = resolve("\"94;0;63\"", &plain()).unwrap();
    assert_eq!(quoted, resolve("94;0;63", &plain()).unwrap());
}

#[test]
fn hex_dark_gray() {
    let c = resolve("#0F0F0F", &plain()).unwrap();
    assert_eq!(c.rgb(), [15, 15, 15]);
    assert_eq!(c.kind(), ColorKind::TrueColor);
    assert_eq!(c.plain_sequence(), "15;15;15");
    assert!(c.is_dark());
    assert!(!c.is_bright());
}

#[test]
fn lowercase_hex_normalizes() {
    assert_eq!(resolve("#5e003f", &plain()).unwrap().hex(), "#5E003F");
}

#[test]
fn named_colors() {
    let c = resolve("DarkBlue", &plain()).unwrap();
    assert_eq!(c, resolve("18", &plain()).unwrap());
    assert_eq!(resolve("Blue3_20", &plain()).unwrap().indexed255_id(), Some(20));
    assert!(resolve("darkblue", &plain()).unwrap_err().is_invalid_specifier());
}

#[test]
fn protan_on_18() {
    let config = DeficiencyConfig::simulating(Deficiency::Protan);
    let c = resolve("18", &config).unwrap();
    assert_eq!(c.rgb(), [0, 24, 135]);
    assert_eq!(c.hex(), "#001887");
    assert_eq!(c.kind(), ColorKind::TrueColor);
    assert_eq!(c.plain_sequence(), "0;24;135");
    assert_eq!(c.foreground_escape(), "\x1b[38;2;0;24;135m");
    assert_eq!(c.index16_id(), None);
    assert_eq!(c.indexed255_id(), None);
}

#[test]
fn simple_algorithm_on_18() {
    let config = DeficiencyConfig::simulating(Deficiency::Tritan).with_simple_algorithm(true);
    assert_eq!(config.algorithm, Algorithm::Vienot1999);
    assert_eq!(resolve("18", &config).unwrap().hex(), "#003333");
}

#[test]
fn transform_forces_true_color() {
    let config = DeficiencyConfig::simulating(Deficiency::Deutan).with_severity(0.0);
    for id in [0u8, 7, 15, 16, 100, 231, 232, 255] {
        let untouched = Color::from_index(id, &plain()).unwrap();
        let c = Color::from_index(id, &config).unwrap();
        assert_eq!(c.kind(), ColorKind::TrueColor);
        assert_eq!(c.palette_id(), None);
        for (o, i) in c.rgb().iter().zip(untouched.rgb()) {
            assert!((i32::from(*o) - i32::from(i)).abs() <= 1, "{id}: {:?}", c.rgb());
        }
    }
}

#[test]
fn invalid_specifiers() {
    for s in ["256", "1;2", "#ZZZZZZ", "-1;0;0", "", "not a color", "1;2;3;4"] {
        let err = resolve(s, &plain()).unwrap_err();
        assert!(err.is_invalid_specifier(), "{s:?}: {err}");
    }
}

#[test]
fn every_index_resolves() {
    for id in 0..=255u8 {
        let c = resolve(&id.to_string(), &plain()).unwrap();
        assert_eq!(c.plain_sequence(), id.to_string());
        assert_eq!(c.to_string(), id.to_string());
        assert_eq!(c.foreground_escape(), format!("\x1b[38;5;{id}m"));
        if id < 16 {
            assert_eq!(c.kind(), ColorKind::Indexed16);
            assert_eq!(c.index16_id(), Some(id));
        } else {
            assert_eq!(c.kind(), ColorKind::Indexed255);
            assert_eq!(c.indexed255_id(), Some(id));
        }
        assert!(!(c.is_bright() && c.is_dark()));
    }
}

#[test]
fn triplets_round_trip_through_hex() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(51) {
            for b in (0..=255u8).step_by(17) {
                let c = resolve(&format!("{r};{g};{b}"), &plain()).unwrap();
                assert_eq!(c.kind(), ColorKind::TrueColor);
                assert_eq!(c.hex(), format!("#{r:02X}{g:02X}{b:02X}"));
                assert_eq!(resolve(c.hex(), &plain()).unwrap(), c);
            }
        }
    }
}

#[test]
fn typed_entry_points_agree() {
    let config = plain();
    assert_eq!(
        Color::from_rgb(94, 0, 63, &config).unwrap(),
        Color::from_hex("#5E003F", &config).unwrap()
    );
    assert_eq!(
        Color::from_name("Fuchsia", &config).unwrap(),
        Color::from_index(13, &config).unwrap()
    );
    assert!(Color::from_hex("94;0;63", &config).is_err());
}

#[test]
fn rec709_brightness() {
    let config = plain().with_brightness(BrightnessModel::Rec709);
    let c = resolve("94;0;63", &config).unwrap();
    assert!(c.is_dark());

    let c = resolve("200;200;200", &config).unwrap();
    assert!(c.is_bright());
}

#[test]
fn serializes_for_reports() {
    let c = resolve("18", &plain()).unwrap();
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["hex"], "#000087");
    assert_eq!(v["kind"], "indexed255");
    assert_eq!(v["indexed255_id"], 18);
    assert!(v["index16_id"].is_null());
}

#[test]
fn rec709_applies_to_palette_colors() {
    let config = plain().with_brightness(BrightnessModel::Rec709);
    let indexed = resolve("18", &config).unwrap();
    let triplet = resolve("0;0;135", &config).unwrap();
    assert_eq!(indexed.is_bright(), triplet.is_bright());
    assert_eq!(indexed.is_dark(), triplet.is_dark());
    assert!(indexed.is_dark());
    assert_eq!(indexed.indexed255_id(), Some(18));

    // legacy keeps the palette's own classification
    assert!(resolve("18", &plain()).unwrap().is_bright());
}
