//! SNFG symbol vocabulary: glyph shapes and the colour palette.

use std::fmt;
use std::str::FromStr;

use crate::error::SnfgError;

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Glyph shape of a residue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    /// Hexoses.
    Sphere,
    /// HexNAcs (filled) and hexosamines (crossed).
    Cube,
    /// Hexuronates (divided) and nonulosonates (filled).
    Diamond,
    /// Deoxyhexoses (filled) and DeoxyhexNAcs (divided).
    Cone,
    /// Di-deoxyhexoses.
    Rectangle,
    /// Pentoses.
    Star,
    /// Unknown and assigned residues.
    Hexagon,
    /// Ketoses.
    Pentagon,
}

impl Shape {
    /// Every supported shape.
    pub const ALL: [Self; 8] = [
        Self::Sphere,
        Self::Cube,
        Self::Diamond,
        Self::Cone,
        Self::Rectangle,
        Self::Star,
        Self::Hexagon,
        Self::Pentagon,
    ];

    /// Lower-case shape name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Diamond => "diamond",
            Self::Cone => "cone",
            Self::Rectangle => "rectangle",
            Self::Star => "star",
            Self::Hexagon => "hexagon",
            Self::Pentagon => "pentagon",
        }
    }

    /// Multiplier applied to the base size so all shapes read as the same
    /// visual weight.
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            Self::Sphere => 0.5,
            Self::Cube => 0.806,
            Self::Diamond => 1.3,
            Self::Hexagon => 1.15,
            Self::Cone | Self::Rectangle | Self::Star | Self::Pentagon => 1.0,
        }
    }
}

impl FromStr for Shape {
    type Err = SnfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| SnfgError::UnsupportedShape(s.to_owned()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Colours used by glyphs and connectors.
///
/// The SNFG palette is defined in CMYK; [`Color::Gray`] and
/// [`Color::Black`] are only used for connectors and bond labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// SNFG white.
    White,
    /// SNFG blue (Glc family).
    Blue,
    /// SNFG green (Man family).
    Green,
    /// SNFG yellow (Gal family).
    Yellow,
    /// SNFG light blue (Tal family).
    Cyan,
    /// SNFG pink (Alt family).
    Pink,
    /// SNFG purple (All family).
    Purple,
    /// SNFG brown (Ido family).
    Brown,
    /// SNFG orange (Gul family).
    Orange,
    /// SNFG red (Fuc).
    Red,
    /// Connector colour.
    Gray,
    /// Label colour.
    Black,
}

impl Color {
    /// CMYK definition for palette colours.
    #[must_use]
    pub fn cmyk(self) -> [f64; 4] {
        match self {
            Self::White => [0.00, 0.00, 0.00, 0.00],
            Self::Blue => [1.00, 0.50, 0.00, 0.00],
            Self::Green => [1.00, 0.00, 1.00, 0.00],
            Self::Yellow => [0.00, 0.15, 1.00, 0.00],
            Self::Cyan => [0.41, 0.05, 0.03, 0.00],
            Self::Pink => [0.00, 0.47, 0.24, 0.00],
            Self::Purple => [0.38, 0.88, 0.00, 0.00],
            Self::Brown => [0.32, 0.48, 0.76, 0.13],
            Self::Orange => [0.00, 0.50, 1.00, 0.00],
            Self::Red => [0.00, 1.00, 1.00, 0.00],
            Self::Gray => [0.00, 0.00, 0.00, 0.255],
            Self::Black => [0.00, 0.00, 0.00, 1.00],
        }
    }

    /// RGB in `0.0..=1.0`, converted from [`Color::cmyk`].
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        let [c, m, y, k] = self.cmyk();
        [
            ((1.0 - c) * (1.0 - k)) as f32,
            ((1.0 - m) * (1.0 - k)) as f32,
            ((1.0 - y) * (1.0 - k)) as f32,
        ]
    }

    /// Lower-case colour name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
