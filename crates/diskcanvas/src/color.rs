//! 24-bit terminal colors: the fixed palette and the neutral swatch

use crossterm::style::Color;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Palette used for per-extension colors in detailed mode
/// (`#636EFA #EF553B #00CC96 #AB63FA #FFA15A #19D3F3 #FF6692 #B6E880 #FF97FF #FECB52`).
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(99, 110, 250),
    Rgb::new(239, 85, 59),
    Rgb::new(0, 204, 150),
    Rgb::new(171, 99, 250),
    Rgb::new(255, 161, 90),
    Rgb::new(25, 211, 243),
    Rgb::new(255, 102, 146),
    Rgb::new(182, 232, 128),
    Rgb::new(255, 151, 255),
    Rgb::new(254, 203, 82),
];

/// Off-white used for directories and everything in simplified mode.
pub const NEUTRAL: Rgb = Rgb::new(250, 250, 250);

/// A color tag stored in canvas cells and style tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// Index into [`PALETTE`], always `< PALETTE.len()`.
    Palette(u8),
    Neutral,
}

impl Swatch {
    /// Number of swatches a running index cycles through: the palette
    /// followed by the neutral slot.
    pub const CYCLE_LEN: usize = PALETTE.len() + 1;

    /// Swatch for a running index. Slots `0..PALETTE.len()` are palette
    /// colors and the last slot of each cycle is [`Swatch::Neutral`].
    pub fn palette(index: usize) -> Self {
        match index % Self::CYCLE_LEN {
            slot if slot < PALETTE.len() => Swatch::Palette(slot as u8),
            _ => Swatch::Neutral,
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Swatch::Palette(i) => PALETTE[i as usize % PALETTE.len()],
            Swatch::Neutral => NEUTRAL,
        }
    }
}
