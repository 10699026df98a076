//! Indexed color palette: 256 standard entries plus the three special slots.
//!
//! Slots 0–255 are the xterm 256-color palette (16 base colors, 6×6×6 color
//! cube, 24-step grayscale ramp). Slots 256/257/258 hold the current default
//! foreground, default background, and cursor colors. Renderers index this
//! table with the 9-bit indices decoded from a [`PackedStyle`].
//!
//! Every entry is stored in `0xFFRRGGBB` form, so any value read out of the
//! palette already satisfies the truecolor classification convention of
//! [`Color::from_argb`].
//!
//! [`PackedStyle`]: crate::PackedStyle

use std::sync::LazyLock;

use crate::color::{
    COLOR_INDEX_BACKGROUND, COLOR_INDEX_CURSOR, COLOR_INDEX_FOREGROUND, Color, NUM_INDEXED_COLORS,
};

/// The 16 base colors, xterm defaults.
const BASE_16: [u32; 16] = [
    0xff00_0000, // black
    0xffcd_0000, // red
    0xff00_cd00, // green
    0xffcd_cd00, // yellow
    0xff00_00ee, // blue
    0xffcd_00cd, // magenta
    0xff00_cdcd, // cyan
    0xffe5_e5e5, // white
    0xff7f_7f7f, // bright black (gray)
    0xffff_0000, // bright red
    0xff00_ff00, // bright green
    0xffff_ff00, // bright yellow
    0xff5c_5cff, // bright blue
    0xffff_00ff, // bright magenta
    0xff00_ffff, // bright cyan
    0xffff_ffff, // bright white
];

const DEFAULT_FOREGROUND: u32 = 0xffff_ffff;
const DEFAULT_BACKGROUND: u32 = 0xff00_0000;
const DEFAULT_CURSOR: u32 = 0xffff_ffff;

/// Shared default table, built once on first use.
static DEFAULT_TABLE: LazyLock<[u32; NUM_INDEXED_COLORS]> = LazyLock::new(build_default_table);

fn build_default_table() -> [u32; NUM_INDEXED_COLORS] {
    let mut table = [0u32; NUM_INDEXED_COLORS];
    table[..16].copy_from_slice(&BASE_16);

    // 6x6x6 color cube (16..232): component n in 0..6 maps to 0 or 55 + 40n.
    for idx in 0..216u32 {
        let component = |n: u32| if n == 0 { 0 } else { 55 + 40 * n };
        let r = component(idx / 36);
        let g = component((idx / 6) % 6);
        let b = component(idx % 6);
        table[16 + idx as usize] = 0xff00_0000 | (r << 16) | (g << 8) | b;
    }

    // Grayscale ramp (232..256): 24 grays from 8 to 238.
    for idx in 0..24u32 {
        let gray = 8 + 10 * idx;
        table[232 + idx as usize] = 0xff00_0000 | (gray << 16) | (gray << 8) | gray;
    }

    table[COLOR_INDEX_FOREGROUND as usize] = DEFAULT_FOREGROUND;
    table[COLOR_INDEX_BACKGROUND as usize] = DEFAULT_BACKGROUND;
    table[COLOR_INDEX_CURSOR as usize] = DEFAULT_CURSOR;
    table
}

/// A 259-entry indexed color table.
///
/// Owned plain value; hosts that share one across threads wrap it themselves
/// (the codec side never touches it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    table: [u32; NUM_INDEXED_COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// A palette with the default xterm colors in every slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: *DEFAULT_TABLE,
        }
    }

    /// Look up a palette slot. `None` for indices past the table.
    #[must_use]
    #[inline]
    pub fn get(&self, index: u16) -> Option<u32> {
        self.table.get(index as usize).copied()
    }

    /// Overwrite a palette slot (OSC 4 and friends).
    ///
    /// The stored value is forced opaque (`0xFF` top byte) so reads always
    /// classify as truecolor. Out-of-range indices are ignored.
    pub fn set(&mut self, index: u16, argb: u32) {
        if let Some(slot) = self.table.get_mut(index as usize) {
            *slot = 0xff00_0000 | argb;
        }
    }

    /// Restore one slot to its default color. Out-of-range indices are
    /// ignored.
    pub fn reset_entry(&mut self, index: u16) {
        if let Some(slot) = self.table.get_mut(index as usize) {
            *slot = DEFAULT_TABLE[index as usize];
        }
    }

    /// Restore every slot to its default color.
    pub fn reset_all(&mut self) {
        self.table = *DEFAULT_TABLE;
    }

    /// Resolve a [`Color`] to a concrete `0xFFRRGGBB` value.
    ///
    /// Indexed colors go through the table; indices past the table fall back
    /// to the default-foreground slot. Truecolor passes through.
    #[must_use]
    pub fn resolve(&self, color: Color) -> u32 {
        match color {
            Color::Indexed(index) => self
                .get(index)
                .unwrap_or(self.table[COLOR_INDEX_FOREGROUND as usize]),
            Color::Rgb(..) => color.to_argb(),
        }
    }
}
