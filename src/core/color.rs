//! Peg colors
//!
//! Colors form a closed enum fixed at construction time. Any string form a
//! frontend hands us (hex or `rgb(...)` notation) is mapped to the enum once,
//! at the boundary; evaluation logic only ever compares enum values.

use std::fmt;

/// One of the eight peg colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Orange,
    Pink,
    Blue,
    Green,
    Grey,
    Black,
}

impl Color {
    /// Number of distinct colors in the palette.
    pub const COUNT: usize = 8;

    /// All colors in palette order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Yellow,
        Self::Orange,
        Self::Pink,
        Self::Blue,
        Self::Green,
        Self::Grey,
        Self::Black,
    ];

    /// Palette index (0-7).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a palette index, or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// RGB triple of the palette color.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (0xFF, 0x00, 0x00),
            Self::Yellow => (0xFF, 0xFF, 0x00),
            Self::Orange => (0xFF, 0xC0, 0x00),
            Self::Pink => (0xF3, 0x6D, 0xED),
            Self::Blue => (0x00, 0x70, 0xC0),
            Self::Green => (0x00, 0xB0, 0x50),
            Self::Grey => (0xA6, 0xA6, 0xA6),
            Self::Black => (0x00, 0x00, 0x00),
        }
    }

    /// Single-letter abbreviation used for parsing and display.
    ///
    /// `r y o p b g s k` (s = slate grey, k = black).
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Yellow => 'y',
            Self::Orange => 'o',
            Self::Pink => 'p',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Grey => 's',
            Self::Black => 'k',
        }
    }

    /// Parse a single-letter abbreviation (case insensitive).
    #[must_use]
    pub const fn from_initial(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'y' => Some(Self::Yellow),
            'o' => Some(Self::Orange),
            'p' => Some(Self::Pink),
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            's' => Some(Self::Grey),
            'k' => Some(Self::Black),
            _ => None,
        }
    }

    /// Canonicalize a CSS color string to a palette color.
    ///
    /// Accepts `#RRGGBB` hex and `rgb(r, g, b)` notation, the two forms a DOM
    /// frontend produces for the same peg. Returns `None` for anything that is
    /// not exactly a palette color.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Color;
    ///
    /// assert_eq!(Color::from_css("#FF0000"), Some(Color::Red));
    /// assert_eq!(Color::from_css("rgb(255, 0, 0)"), Some(Color::Red));
    /// assert_eq!(Color::from_css("#123456"), None);
    /// ```
    #[must_use]
    pub fn from_css(s: &str) -> Option<Self> {
        let rgb = parse_css_rgb(s.trim())?;
        Self::ALL.into_iter().find(|c| c.rgb() == rgb)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Grey => "grey",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse `#RRGGBB` or `rgb(r, g, b)` into an RGB triple.
fn parse_css_rgb(s: &str) -> Option<(u8, u8, u8)> {
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some((r, g, b));
    }

    let body = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut channels = body.split(',').map(str::trim);
    let r = channels.next()?.parse().ok()?;
    let g = channels.next()?.parse().ok()?;
    let b = channels.next()?.parse().ok()?;
    // Ignore a possible alpha channel
    Some((r, g, b))
}
