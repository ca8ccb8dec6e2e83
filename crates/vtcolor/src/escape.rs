//! SGR escape sequences for terminal colors.
//!
//! | Kind | Foreground | Background |
//! |------|------------|------------|
//! | Indexed | `ESC[38;5;<n>m` | `ESC[48;5;<n>m` |
//! | True color | `ESC[38;2;<r>;<g>;<b>m` | `ESC[48;2;<r>;<g>;<b>m` |
//!
//! Indexed colors always use the extended `38;5` form, even for ids below
//! 16, so the sequence does not depend on how the terminal maps the
//! compact 30-37/90-97 codes.

/// The escape character, `0x1B`.
pub const ESC: char = '\x1b';

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Which color slot a sequence sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color.
    Foreground,
    /// Cell background.
    Background,
}

impl Layer {
    /// SGR parameter introducing an extended color.
    #[inline]
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// Sequence selecting a palette entry.
pub fn indexed(layer: Layer, id: u8) -> String {
    format!("{ESC}[{};5;{id}m", layer.sgr())
}

/// Sequence selecting a 24-bit color.
pub fn true_color(layer: Layer, rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("{ESC}[{};2;{r};{g};{b}m", layer.sgr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed() {
        assert_eq!(indexed(Layer::Foreground, 18), "\x1b[38;5;18m");
        assert_eq!(indexed(Layer::Background, 0), "\x1b[48;5;0m");
        assert_eq!(indexed(Layer::Foreground, 255), "\x1b[38;5;255m");
    }

    #[test]
    fn test_true_color() {
        assert_eq!(true_color(Layer::Foreground, [94, 0, 63]), "\x1b[38;2;94;0;63m");
        assert_eq!(true_color(Layer::Background, [0, 0, 0]), "\x1b[48;2;0;0;0m");
    }
}
