//! The resolved color value.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, trace};
use vtcolor_core::{Brightness, BrightnessModel, DeficiencyConfig, Error, Result, check_channel};
use vtcolor_palette::{PaletteEntry, PaletteLookup, Xterm256};

use crate::escape::{self, Layer};
use crate::spec::{ColorSpec, unpack};

/// How a color is addressed on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKind {
    /// Palette ids 0-15.
    Indexed16,
    /// Palette ids 16-255.
    Indexed255,
    /// 24-bit color.
    TrueColor,
}

impl ColorKind {
    /// Kind of a palette id.
    #[inline]
    pub const fn for_index(id: u8) -> Self {
        if id < 16 { Self::Indexed16 } else { Self::Indexed255 }
    }

    /// Whether the color refers to a palette entry.
    #[inline]
    pub const fn is_indexed(self) -> bool {
        !matches!(self, Self::TrueColor)
    }
}

/// A fully resolved terminal color.
///
/// Immutable once built. Every field is derived from the final channels
/// and the kind, so two colors built from equivalent specifiers compare
/// equal.
///
/// # Example
///
/// ```rust
/// use vtcolor::{Color, ColorKind};
///
/// let c: Color = "18".parse().unwrap();
/// assert_eq!(c.kind(), ColorKind::Indexed255);
/// assert_eq!(c.hex(), "#000087");
/// assert_eq!(c.foreground_escape(), "\x1b[38;5;18m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    kind: ColorKind,
    plain_sequence: String,
    plain_sequence_enclosed: String,
    foreground_escape: String,
    background_escape: String,
    hex: String,
    is_bright: bool,
    is_dark: bool,
    index16_id: Option<u8>,
    indexed255_id: Option<u8>,
}

impl Color {
    fn indexed(entry: PaletteEntry, brightness: Brightness) -> Self {
        let kind = ColorKind::for_index(entry.id);
        let plain = entry.id.to_string();
        Self {
            r: entry.r,
            g: entry.g,
            b: entry.b,
            kind,
            plain_sequence_enclosed: plain.clone(),
            plain_sequence: plain,
            foreground_escape: escape::indexed(Layer::Foreground, entry.id),
            background_escape: escape::indexed(Layer::Background, entry.id),
            hex: hex_string(entry.rgb()),
            is_bright: brightness.is_bright,
            is_dark: brightness.is_dark,
            index16_id: (kind == ColorKind::Indexed16).then_some(entry.id),
            indexed255_id: (kind == ColorKind::Indexed255).then_some(entry.id),
        }
    }

    fn true_color(rgb: [u8; 3], brightness: Brightness) -> Self {
        let [r, g, b] = rgb;
        let plain = format!("{r};{g};{b}");
        Self {
            r,
            g,
            b,
            kind: ColorKind::TrueColor,
            plain_sequence_enclosed: format!("\"{plain}\""),
            plain_sequence: plain,
            foreground_escape: escape::true_color(Layer::Foreground, rgb),
            background_escape: escape::true_color(Layer::Background, rgb),
            hex: hex_string(rgb),
            is_bright: brightness.is_bright,
            is_dark: brightness.is_dark,
            index16_id: None,
            indexed255_id: None,
        }
    }

    /// Builds a color from a parsed specifier.
    ///
    /// Names are looked up in `palette`. When the configuration enables the
    /// deficiency transform, the channels are simulated and the result is
    /// always a true color without palette back-references.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSpecifier`] for a name the palette does not know
    /// - [`Error::OutOfRange`] for a transform with a bad severity
    pub fn from_spec(
        spec: &ColorSpec,
        config: &DeficiencyConfig,
        palette: &dyn PaletteLookup,
    ) -> Result<Self> {
        let (entry, rgb) = match spec {
            ColorSpec::Index(id) => {
                let entry = palette.lookup(*id);
                (Some(entry), entry.rgb())
            }
            ColorSpec::Name(name) => {
                let id = palette
                    .find(name)
                    .ok_or_else(|| Error::invalid_specifier(name.as_str(), "unknown palette name"))?;
                let entry = palette.lookup(id);
                (Some(entry), entry.rgb())
            }
            ColorSpec::Rgb(r, g, b) => (None, [*r, *g, *b]),
            ColorSpec::Hex(v) => (None, unpack(*v)),
        };
        trace!(%spec, ?rgb, indexed = entry.is_some(), "color::from_spec");

        if config.transform_enabled {
            let simulated = vtcolor_cvd::simulate(
                rgb,
                config.deficiency,
                config.severity,
                config.algorithm,
            )?;
            debug!(
                %spec,
                deficiency = %config.deficiency,
                algorithm = %config.algorithm,
                severity = config.severity,
                from = ?rgb,
                to = ?simulated,
                "applied deficiency transform"
            );
            return Ok(Self::true_color(simulated, config.brightness.classify(simulated)));
        }

        Ok(match entry {
            Some(entry) => Self::indexed(entry, indexed_brightness(&entry, config)),
            None => Self::true_color(rgb, config.brightness.classify(rgb)),
        })
    }

    /// Resolves a specifier string with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::resolve).
    pub fn parse(spec: &str) -> Result<Self> {
        crate::resolve(spec, &DeficiencyConfig::default())
    }

    /// Palette entry by id.
    ///
    /// # Errors
    ///
    /// Fails only when the transform is enabled with a bad severity.
    pub fn from_index(id: u8, config: &DeficiencyConfig) -> Result<Self> {
        Self::from_spec(&ColorSpec::Index(id), config, &Xterm256)
    }

    /// Palette entry by name, case-sensitive.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpecifier`] for an unknown name.
    pub fn from_name(name: &str, config: &DeficiencyConfig) -> Result<Self> {
        Self::from_spec(&ColorSpec::Name(name.to_owned()), config, &Xterm256)
    }

    /// True color from integer channels.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming the first channel outside `[0, 255]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vtcolor::Color;
    /// use vtcolor_core::DeficiencyConfig;
    ///
    /// let config = DeficiencyConfig::default();
    /// assert_eq!(Color::from_rgb(94, 0, 63, &config).unwrap().hex(), "#5E003F");
    /// assert!(Color::from_rgb(0, 300, 0, &config).is_err());
    /// ```
    pub fn from_rgb(r: i32, g: i32, b: i32, config: &DeficiencyConfig) -> Result<Self> {
        let spec = ColorSpec::Rgb(
            check_channel("red", r)?,
            check_channel("green", g)?,
            check_channel("blue", b)?,
        );
        Self::from_spec(&spec, config, &Xterm256)
    }

    /// True color from a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpecifier`] if the input is not a hex color.
    pub fn from_hex(hex: &str, config: &DeficiencyConfig) -> Result<Self> {
        Self::from_spec(&ColorSpec::parse_hex(hex)?, config, &Xterm256)
    }

    /// The shared default color: palette entry 0, untransformed.
    pub fn empty() -> &'static Color {
        static EMPTY: OnceLock<Color> = OnceLock::new();
        EMPTY.get_or_init(|| {
            let entry = Xterm256.lookup(0);
            Self::indexed(entry, indexed_brightness(&entry, &DeficiencyConfig::default()))
        })
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Channels as an array.
    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Terminal addressing kind.
    #[inline]
    pub fn kind(&self) -> ColorKind {
        self.kind
    }

    /// Palette id as text, or `r;g;b`.
    pub fn plain_sequence(&self) -> &str {
        &self.plain_sequence
    }

    /// Like [`plain_sequence`](Self::plain_sequence) but with true colors
    /// wrapped in double quotes.
    pub fn plain_sequence_enclosed(&self) -> &str {
        &self.plain_sequence_enclosed
    }

    /// Sequence setting this as the text color.
    pub fn foreground_escape(&self) -> &str {
        &self.foreground_escape
    }

    /// Sequence setting this as the background color.
    pub fn background_escape(&self) -> &str {
        &self.background_escape
    }

    /// Uppercase `#RRGGBB`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Luma above the midpoint.
    #[inline]
    pub fn is_bright(&self) -> bool {
        self.is_bright
    }

    /// Luma below the midpoint.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Palette id, for ids 0-15.
    #[inline]
    pub fn index16_id(&self) -> Option<u8> {
        self.index16_id
    }

    /// Palette id, for ids 16-255.
    #[inline]
    pub fn indexed255_id(&self) -> Option<u8> {
        self.indexed255_id
    }

    /// Palette id of an indexed color.
    #[inline]
    pub fn palette_id(&self) -> Option<u8> {
        self.index16_id.or(self.indexed255_id)
    }

    /// Wraps `text` in this color as foreground, followed by a reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{text}{}", self.foreground_escape, escape::RESET)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::empty().clone()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_sequence)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The palette's own classification holds for the legacy model; any other
/// model reclassifies the entry's channels.
fn indexed_brightness(entry: &PaletteEntry, config: &DeficiencyConfig) -> Brightness {
    match config.brightness {
        BrightnessModel::Legacy => Brightness {
            is_bright: entry.is_bright,
            is_dark: entry.is_dark,
        },
        model => model.classify(entry.rgb()),
    }
}

fn hex_string(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_index() {
        assert_eq!(ColorKind::for_index(0), ColorKind::Indexed16);
        assert_eq!(ColorKind::for_index(15), ColorKind::Indexed16);
        assert_eq!(ColorKind::for_index(16), ColorKind::Indexed255);
        assert!(!ColorKind::TrueColor.is_indexed());
    }

    #[test]
    fn test_empty_is_shared() {
        let a = Color::empty();
        let b = Color::empty();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.plain_sequence(), "0");
        assert_eq!(a.kind(), ColorKind::Indexed16);
        assert_eq!(Color::default(), *a);
    }

    #[test]
    fn test_unknown_name() {
        let err = Color::from_name("NotAColor", &DeficiencyConfig::default()).unwrap_err();
        assert!(err.is_invalid_specifier());
    }

    #[test]
    fn test_from_rgb_names_channel() {
        let err = Color::from_rgb(0, 0, -5, &DeficiencyConfig::default()).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_paint() {
        let c = Color::from_index(9, &DeficiencyConfig::default()).unwrap();
        assert_eq!(c.paint("x"), "\x1b[38;5;9mx\x1b[0m");
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string([0, 24, 135]), "#001887");
        assert_eq!(hex_string([255, 0, 255]), "#FF00FF");
    }
}
