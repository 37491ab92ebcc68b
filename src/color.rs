//! The fixed set of sticker colors and lookups by their one letter initial.

use serde::{Deserialize, Serialize};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A sticker color. There are exactly seven, one per face of a solved cube plus `Colorless` for
/// facelets that are hidden or unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    /// Right face of the solved cube.
    Red,
    /// Up face of the solved cube.
    Yellow,
    /// Front face of the solved cube.
    Blue,
    /// Left face of the solved cube.
    Orange,
    /// Down face of the solved cube.
    White,
    /// Back face of the solved cube.
    Green,
    /// Fallback for interior facelets and anything that failed to parse.
    Colorless,
}

impl Color {
    /// Every color, in canonical lookup order.
    pub const ARRAY: [Color; 7] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Orange,
        Color::White,
        Color::Green,
        Color::Colorless,
    ];

    /// Lowercase name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::White => "white",
            Color::Green => "green",
            Color::Colorless => "colorless",
        }
    }

    /// The single character code used in the textual cubelet encoding.
    pub const fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Colorless => 'X',
        }
    }

    /// CSS hex code, what a renderer uses as the display color.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#F00",
            Color::Yellow => "#FE0",
            Color::Blue => "#00D",
            Color::Orange => "#F60",
            Color::White => "#FFF",
            Color::Green => "#0A0",
            Color::Colorless => "#DDD",
        }
    }

    /// CSS style for text drawn in this color.
    pub const fn style_foreground(self) -> &'static str {
        match self {
            Color::Red => "font-weight: bold; color: #F00",
            Color::Yellow => "font-weight: bold; color: #ED0",
            Color::Blue => "font-weight: bold; color: #00D",
            Color::Orange => "font-weight: bold; color: #F60",
            Color::White => "font-weight: bold; color: #888",
            Color::Green => "font-weight: bold; color: #0A0",
            Color::Colorless => "color: #EEE",
        }
    }

    /// CSS style for text drawn on a background of this color.
    pub const fn style_background(self) -> &'static str {
        match self {
            Color::Red => "background-color: #F00; color: rgba( 255, 255, 255, 0.9 )",
            Color::Yellow => "background-color: #FE0; color: rgba( 0, 0, 0, 0.5 )",
            Color::Blue => "background-color: #00D; color: rgba( 255, 255, 255, 0.9 )",
            Color::Orange => "background-color: #F60; color: rgba( 255, 255, 255, 0.9 )",
            Color::White => "background-color: #F3F3F3; color: rgba( 0, 0, 0, 0.5 )",
            Color::Green => "background-color: #0A0; color: rgba( 255, 255, 255, 0.9 )",
            Color::Colorless => "color: #DDD",
        }
    }

    /// Whether this is one of the six face colors.
    pub const fn is_chromatic(self) -> bool {
        !matches!(self, Color::Colorless)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Colorless
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.initial())
    }
}

/// The process wide, immutable color registry. Obtain it with [`ColorRegistry::global`].
#[derive(Debug)]
pub struct ColorRegistry {
    colors: [Color; 7],
}

static REGISTRY: ColorRegistry = ColorRegistry {
    colors: Color::ARRAY,
};

impl ColorRegistry {
    /// The one registry instance.
    pub fn global() -> &'static ColorRegistry {
        &REGISTRY
    }

    /// All colors in canonical order: red, yellow, blue, orange, white, green, colorless.
    pub fn all(&self) -> &[Color; 7] {
        &self.colors
    }

    /// Look a color up by its initial, ignoring surrounding whitespace. Anything that isn't the
    /// initial of a face color (including `X`) gives `Colorless`.
    pub fn from_initial(&self, code: &str) -> Color {
        let code = code.trim();
        self.colors
            .iter()
            .copied()
            .filter(|c| c.is_chromatic())
            .find(|c| {
                let mut chars = code.chars();
                chars.next() == Some(c.initial()) && chars.next().is_none()
            })
            .unwrap_or(Color::Colorless)
    }

    /// Look up every comma separated token of `text` in order.
    pub fn from_csv(&self, text: &str) -> Vec<Color> {
        text.split(',').map(|code| self.from_initial(code)).collect()
    }
}

/// Shorthand for `ColorRegistry::global().from_initial(code)`.
pub fn from_initial(code: &str) -> Color {
    ColorRegistry::global().from_initial(code)
}

/// Shorthand for `ColorRegistry::global().from_csv(text)`.
pub fn from_csv(text: &str) -> Vec<Color> {
    ColorRegistry::global().from_csv(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_initial() {
        assert_eq!(from_initial("R"), Color::Red);
        assert_eq!(from_initial("  G\t"), Color::Green);
        assert_eq!(from_initial("?"), Color::Colorless);
        assert_eq!(from_initial("X"), Color::Colorless);
        assert_eq!(from_initial(""), Color::Colorless);
        // initials are case sensitive and must be a single character
        assert_eq!(from_initial("r"), Color::Colorless);
        assert_eq!(from_initial("RR"), Color::Colorless);
    }

    #[test]
    fn lookup_csv() {
        assert_eq!(
            from_csv("R,G,X"),
            vec![Color::Red, Color::Green, Color::Colorless]
        );
        assert_eq!(from_csv(""), vec![Color::Colorless]);
        assert_eq!(from_csv("W, Y ,,B").len(), 4);
    }

    #[test]
    fn registry_order() {
        assert_eq!(ColorRegistry::global().all(), &Color::ARRAY);
        assert_eq!(ColorRegistry::global().all()[6], Color::Colorless);
        assert_eq!(Color::default(), Color::Colorless);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn initial_roundtrip(c in any::<Color>()) {
            assert_eq!(from_initial(&c.to_string()), c);
        }
    }
}
