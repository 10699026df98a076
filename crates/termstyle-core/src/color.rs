//! Color representation and the 32-bit ARGB wire convention.
//!
//! Terminal colors come in two shapes: a palette index (the 256 standard
//! entries plus three special slots) or an explicit 24-bit RGB value. On the
//! wire both travel as a single `u32`: a value whose top byte is `0xFF` is
//! truecolor in `0xFFRRGGBB` form, anything else is an index. Every producer
//! of color values must honor this convention.

/// Palette slot holding the current default foreground color.
pub const COLOR_INDEX_FOREGROUND: u16 = 256;
/// Palette slot holding the current default background color.
pub const COLOR_INDEX_BACKGROUND: u16 = 257;
/// Palette slot holding the current cursor color.
pub const COLOR_INDEX_CURSOR: u16 = 258;

/// The 256 standard color entries and the three special (foreground,
/// background and cursor) ones. Palette storage must hold at least this many.
pub const NUM_INDEXED_COLORS: usize = 259;

/// Color representation for terminal cells.
///
/// The tagged-union form used everywhere outside the packed bit layout.
/// [`PackedStyle`](crate::PackedStyle) flattens it into a shared 24-bit field
/// at the encode/decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette slot reference. Semantically valid in `0..259`; the codec
    /// preserves only the low 9 bits, so decoded values may reach 511.
    Indexed(u16),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Indexed(COLOR_INDEX_FOREGROUND)
    }
}

impl Color {
    /// Classify a 32-bit ARGB value.
    ///
    /// Top byte `0xFF` selects truecolor (low 24 bits kept); any other top
    /// byte selects an index (low 9 bits kept, matching what the codec
    /// preserves). Values are masked, never rejected.
    #[must_use]
    #[inline]
    pub const fn from_argb(value: u32) -> Self {
        if value & 0xff00_0000 == 0xff00_0000 {
            Color::Rgb(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )
        } else {
            Color::Indexed((value & 0x1ff) as u16)
        }
    }

    /// The 32-bit wire form: `0xFFRRGGBB` for truecolor, the raw index
    /// otherwise.
    #[must_use]
    #[inline]
    pub const fn to_argb(self) -> u32 {
        match self {
            Color::Indexed(idx) => idx as u32,
            Color::Rgb(r, g, b) => {
                0xff00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
            }
        }
    }

    /// Whether this is an explicit 24-bit color.
    #[must_use]
    #[inline]
    pub const fn is_truecolor(self) -> bool {
        matches!(self, Color::Rgb(..))
    }
}
