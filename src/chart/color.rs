//! Colors and marker symbols for chart series.

use ratatui::style::Color;
use ratatui::symbols::Marker;
use std::fmt;
use std::str::FromStr;

use crate::error::RxplotError;

/// 24-bit color entered as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Default series colors, assigned in rotation.
pub const SERIES_PALETTE: [Rgb; 10] = [
    Rgb(0x7c, 0xb5, 0xec),
    Rgb(0x43, 0x43, 0x48),
    Rgb(0x90, 0xed, 0x7d),
    Rgb(0xf7, 0xa3, 0x5c),
    Rgb(0x80, 0x85, 0xe9),
    Rgb(0xf1, 0x5c, 0x80),
    Rgb(0xe4, 0xd3, 0x54),
    Rgb(0x2b, 0x90, 0x8f),
    Rgb(0xf4, 0x5b, 0x5b),
    Rgb(0x91, 0xe8, 0xe1),
];

impl Rgb {
    /// Palette color for the n-th series.
    pub fn palette(n: usize) -> Self {
        SERIES_PALETTE[n % SERIES_PALETTE.len()]
    }

    /// Convert to a terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = RxplotError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RxplotError::invalid_input("color", s);
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Rgb(expand(0)?, expand(1)?, expand(2)?))
            },
            _ => Err(invalid()),
        }
    }
}

/// Marker symbol drawn at each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbol {
    /// Small dot.
    #[default]
    Circle,
    /// Filled cell.
    Square,
    /// Braille sub-cell dot.
    Diamond,
    /// Half-height block.
    Triangle,
    /// Bar glyph.
    TriangleDown,
}

impl Symbol {
    /// All symbols in cycling order.
    pub const ALL: [Symbol; 5] = [
        Symbol::Circle,
        Symbol::Square,
        Symbol::Diamond,
        Symbol::Triangle,
        Symbol::TriangleDown,
    ];

    /// Get symbol name.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Square => "square",
            Symbol::Diamond => "diamond",
            Symbol::Triangle => "triangle",
            Symbol::TriangleDown => "triangle-down",
        }
    }

    /// Terminal marker used to draw this symbol.
    pub fn marker(self) -> Marker {
        match self {
            Symbol::Circle => Marker::Dot,
            Symbol::Square => Marker::Block,
            Symbol::Diamond => Marker::Braille,
            Symbol::Triangle => Marker::HalfBlock,
            Symbol::TriangleDown => Marker::Bar,
        }
    }
}

impl FromStr for Symbol {
    type Err = RxplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sym| sym.name() == wanted)
            .ok_or_else(|| RxplotError::invalid_input("symbol", s))
    }
}
