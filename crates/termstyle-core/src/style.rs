//! Packed 64-bit per-cell style codec.
//!
//! Every character cell stores its visual appearance as one [`PackedStyle`]:
//! foreground color, background color, underline kind, and attribute flags
//! packed into a single `u64`. The layout is fixed (bit 0 = LSB) and must be
//! reproduced exactly by anything that persists or transmits raw values:
//!
//! - bits 0–2: underline kind (0–4)
//! - bits 3–11: attribute flags (bold..dim)
//! - bit 12: internal foreground-is-truecolor marker
//! - bit 13: internal background-is-truecolor marker
//! - bits 14–15: unused, always zero for encoded values
//! - bits 16–39: background color field (24 bits)
//! - bits 40–63: foreground color field (24 bits)
//!
//! A color field holds either the low 24 bits of a truecolor value (marker
//! set) or a 9-bit palette index (marker clear, upper 15 bits zero). The two
//! marker bits are owned by the codec: callers never set them, and the typed
//! accessors never expose them.
//!
//! Every operation here is a total, pure bit transform. Out-of-range inputs
//! are masked, never rejected: palette indices keep their low 9 bits,
//! truecolor values their low 24, effect words their low 12.

use bitflags::bitflags;

use crate::color::{COLOR_INDEX_BACKGROUND, COLOR_INDEX_FOREGROUND, Color};

bitflags! {
    /// Caller-visible text attribute flags.
    ///
    /// Bit positions 3–11 of the packed value. Positions 0–2 hold the
    /// underline kind and 12–13 the codec-internal truecolor markers, so
    /// neither appears here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Effect: u16 {
        const BOLD          = 1 << 3;
        const ITALIC        = 1 << 4;
        const UNDERLINE     = 1 << 5;
        const BLINK         = 1 << 6;
        const INVERSE       = 1 << 7;
        const INVISIBLE     = 1 << 8;
        const STRIKETHROUGH = 1 << 9;
        /// Marks characters DECSCA has defined as selectively erasable
        /// (DECSED/DECSEL only erase protected-clear cells).
        const PROTECTED     = 1 << 10;
        /// Dim colors. Also known as faint or half intensity.
        const DIM           = 1 << 11;
    }
}

/// Set iff the foreground field holds a 24-bit color instead of an index.
const TRUECOLOR_FOREGROUND: u64 = 1 << 12;
/// Set iff the background field holds a 24-bit color instead of an index.
const TRUECOLOR_BACKGROUND: u64 = 1 << 13;

/// Bits of a caller's effect word the codec accepts: underline kind plus
/// flags. Bits 12–15 are reserved and cleared on encode.
const EFFECT_CALLER_MASK: u16 = 0x0fff;

/// The visual style of an underline when [`Effect::UNDERLINE`] is set.
///
/// Stored in 3 bits; raw values 5–7 are representable on the wire (e.g. in
/// foreign-constructed values) but have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum UnderlineKind {
    #[default]
    Straight = 0,
    Double = 1,
    Curly = 2,
    Dotted = 3,
    Dashed = 4,
}

impl UnderlineKind {
    /// Typed view of a 3-bit underline field. `None` for the unused
    /// encodings 5–7.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b111 {
            0 => Some(UnderlineKind::Straight),
            1 => Some(UnderlineKind::Double),
            2 => Some(UnderlineKind::Curly),
            3 => Some(UnderlineKind::Dotted),
            4 => Some(UnderlineKind::Dashed),
            _ => None,
        }
    }
}

/// One cell's packed visual style.
///
/// An opaque, immutable 64-bit scalar. Produced by [`encode`] (or the raw
/// [`encode_argb`]), copied freely, and inspected only through the decode
/// accessors. Fits in a machine word, so a concurrent reader can always read
/// one value without tearing; synchronization of any shared cell array is
/// the caller's concern.
///
/// [`encode`]: PackedStyle::encode
/// [`encode_argb`]: PackedStyle::encode_argb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PackedStyle(u64);

impl Default for PackedStyle {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl PackedStyle {
    /// Default foreground and background colors and no effects.
    pub const NORMAL: Self = Self::encode_argb(
        COLOR_INDEX_FOREGROUND as u32,
        COLOR_INDEX_BACKGROUND as u32,
        0,
    );

    /// Encode from the 32-bit ARGB wire forms.
    ///
    /// Each color classifies as truecolor iff its top byte is `0xFF`
    /// (`0xFFRRGGBB`, low 24 bits kept); otherwise it is an index and only
    /// its low 9 bits are kept. `effect` supplies bits 0–11 (underline kind
    /// plus flags); its bits 12–15 are reserved and cleared. Total over all
    /// inputs.
    #[must_use]
    pub const fn encode_argb(fore: u32, back: u32, effect: u16) -> Self {
        let mut bits = (effect & EFFECT_CALLER_MASK) as u64;
        if fore & 0xff00_0000 == 0xff00_0000 {
            bits |= TRUECOLOR_FOREGROUND | (((fore & 0x00ff_ffff) as u64) << 40);
        } else {
            bits |= ((fore & 0x1ff) as u64) << 40;
        }
        if back & 0xff00_0000 == 0xff00_0000 {
            bits |= TRUECOLOR_BACKGROUND | (((back & 0x00ff_ffff) as u64) << 16);
        } else {
            bits |= ((back & 0x1ff) as u64) << 16;
        }
        Self(bits)
    }

    /// Encode from the typed color and attribute forms.
    #[must_use]
    pub const fn encode(fg: Color, bg: Color, underline: UnderlineKind, effect: Effect) -> Self {
        let word = (effect.bits() & EFFECT_CALLER_MASK) | underline as u16;
        Self::encode_argb(fg.to_argb(), bg.to_argb(), word)
    }

    /// Decode the foreground to its 32-bit ARGB wire form.
    ///
    /// Truecolor comes back as `0xFF000000 | rgb`; an index comes back as
    /// the raw 9-bit field (0–511, not range-checked against the palette).
    #[must_use]
    #[inline]
    pub const fn foreground_argb(self) -> u32 {
        if self.0 & TRUECOLOR_FOREGROUND == 0 {
            ((self.0 >> 40) & 0x1ff) as u32
        } else {
            0xff00_0000 | ((self.0 >> 40) & 0x00ff_ffff) as u32
        }
    }

    /// Decode the background to its 32-bit ARGB wire form.
    #[must_use]
    #[inline]
    pub const fn background_argb(self) -> u32 {
        if self.0 & TRUECOLOR_BACKGROUND == 0 {
            ((self.0 >> 16) & 0x1ff) as u32
        } else {
            0xff00_0000 | ((self.0 >> 16) & 0x00ff_ffff) as u32
        }
    }

    /// Decode the foreground as a typed [`Color`].
    #[must_use]
    #[inline]
    pub const fn foreground(self) -> Color {
        Color::from_argb(self.foreground_argb())
    }

    /// Decode the background as a typed [`Color`].
    #[must_use]
    #[inline]
    pub const fn background(self) -> Color {
        Color::from_argb(self.background_argb())
    }

    /// Whether the foreground field holds an explicit 24-bit color.
    #[must_use]
    #[inline]
    pub const fn foreground_is_truecolor(self) -> bool {
        self.0 & TRUECOLOR_FOREGROUND != 0
    }

    /// Whether the background field holds an explicit 24-bit color.
    #[must_use]
    #[inline]
    pub const fn background_is_truecolor(self) -> bool {
        self.0 & TRUECOLOR_BACKGROUND != 0
    }

    /// Bits 0–15 raw, *including* the two internal truecolor marker bits
    /// (12 and 13).
    ///
    /// This is the wire-level effect word. Callers that want only the
    /// user-visible attributes must use [`effects`](Self::effects) or mask
    /// bits 12–13 off themselves.
    #[must_use]
    #[inline]
    pub const fn effect_word(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// The caller-visible attribute flags, with the underline kind and
    /// marker bits masked off.
    #[must_use]
    #[inline]
    pub const fn effects(self) -> Effect {
        Effect::from_bits_truncate(self.effect_word())
    }

    /// Bits 0–2 raw. Values 5–7 can surface from foreign-constructed
    /// values and are the caller's to treat as invalid.
    #[must_use]
    #[inline]
    pub const fn underline_bits(self) -> u8 {
        (self.0 & 0b111) as u8
    }

    /// Typed underline kind, or `None` for the unused encodings 5–7.
    #[must_use]
    #[inline]
    pub const fn underline(self) -> Option<UnderlineKind> {
        UnderlineKind::from_bits(self.underline_bits())
    }

    /// Return a copy with only the underline kind (bits 0–2) replaced.
    ///
    /// `kind` is masked to 3 bits, not range-checked; 5–7 pass through.
    #[must_use]
    #[inline]
    pub const fn with_underline_bits(self, kind: u8) -> Self {
        Self((self.0 & !0b111) | (kind & 0b111) as u64)
    }

    /// Return a copy with only the underline kind replaced.
    #[must_use]
    #[inline]
    pub const fn with_underline(self, kind: UnderlineKind) -> Self {
        self.with_underline_bits(kind as u8)
    }

    /// The raw 64-bit persisted/wire form.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Reinterpret a raw 64-bit value as a packed style.
    ///
    /// No validation: foreign values round-trip through the accessors
    /// bit-for-bit, including any bits an encoder would never produce.
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_is_exact() {
        // fg index 5 at bits 40..49, bg index 7 at bits 16..25, BOLD at bit 3.
        let style = PackedStyle::encode_argb(5, 7, Effect::BOLD.bits());
        assert_eq!(style.bits(), (5u64 << 40) | (7u64 << 16) | (1 << 3));

        let tc = PackedStyle::encode_argb(0xffaa_bbcc, 2, 0);
        assert_eq!(tc.bits(), (0xaa_bbccu64 << 40) | (2u64 << 16) | (1 << 12));
    }

    #[test]
    fn normal_is_default_slots_no_effects() {
        let style = PackedStyle::NORMAL;
        assert_eq!(style.foreground_argb(), 256);
        assert_eq!(style.background_argb(), 257);
        assert_eq!(style.effect_word(), 0);
        assert_eq!(PackedStyle::default(), style);
    }

    #[test]
    fn indexed_round_trip() {
        for index in [0u32, 1, 15, 231, 255, 256, 257, 258] {
            let style = PackedStyle::encode_argb(index, 0, 0);
            assert_eq!(style.foreground_argb(), index);
            assert!(!style.foreground_is_truecolor());

            let style = PackedStyle::encode_argb(0, index, 0);
            assert_eq!(style.background_argb(), index);
            assert!(!style.background_is_truecolor());
        }
    }

    #[test]
    fn truecolor_round_trip() {
        let style = PackedStyle::encode_argb(0xff12_3456, 0xfffe_dcba, 0);
        assert_eq!(style.foreground_argb(), 0xff12_3456);
        assert_eq!(style.background_argb(), 0xfffe_dcba);
        assert!(style.foreground_is_truecolor());
        assert!(style.background_is_truecolor());
    }

    #[test]
    fn out_of_range_index_masks_not_rejects() {
        // 300 < 512: survives the 9-bit field.
        assert_eq!(PackedStyle::encode_argb(300, 0, 0).foreground_argb(), 300);
        // 600 wraps: 600 & 0x1ff == 88. Specified behavior, not a defect.
        assert_eq!(PackedStyle::encode_argb(600, 0, 0).foreground_argb(), 88);
        assert_eq!(PackedStyle::encode_argb(0, 600, 0).background_argb(), 88);
    }

    #[test]
    fn caller_reserved_effect_bits_cleared() {
        // Bits 12-15 of the caller word must not leak into the encoding.
        let style = PackedStyle::encode_argb(1, 2, 0xf000 | Effect::BOLD.bits());
        assert_eq!(style.effect_word(), Effect::BOLD.bits());
        assert!(!style.foreground_is_truecolor());
        assert!(!style.background_is_truecolor());
    }

    #[test]
    fn effect_word_includes_marker_bits() {
        let style = PackedStyle::encode_argb(0xff00_00ff, 3, Effect::ITALIC.bits());
        assert_eq!(style.effect_word(), Effect::ITALIC.bits() | (1 << 12));
        // The masked view hides them.
        assert_eq!(style.effects(), Effect::ITALIC);
    }

    #[test]
    fn unused_bits_14_15_round_trip_zero() {
        let style = PackedStyle::encode_argb(0xffff_ffff, 0xffff_ffff, 0xffff);
        assert_eq!(style.bits() & (0b11 << 14), 0);
    }

    #[test]
    fn with_underline_changes_only_low_three_bits() {
        let style = PackedStyle::encode_argb(
            0xffaa_0011,
            42,
            Effect::UNDERLINE.bits() | UnderlineKind::Curly as u16,
        );
        let restyled = style.with_underline(UnderlineKind::Dashed);
        assert_eq!(restyled.underline(), Some(UnderlineKind::Dashed));
        assert_eq!(restyled.bits() & !0b111, style.bits() & !0b111);
        assert_eq!(restyled.foreground_argb(), style.foreground_argb());
        assert_eq!(restyled.background_argb(), style.background_argb());
    }

    #[test]
    fn underline_kinds_5_to_7_pass_through() {
        for raw in 5u8..=7 {
            let style = PackedStyle::NORMAL.with_underline_bits(raw);
            assert_eq!(style.underline_bits(), raw);
            assert_eq!(style.underline(), None);
        }
        // Masked to 3 bits.
        assert_eq!(PackedStyle::NORMAL.with_underline_bits(0b1010).underline_bits(), 0b010);
    }

    #[test]
    fn typed_encode_matches_raw() {
        let typed = PackedStyle::encode(
            Color::Rgb(0x10, 0x20, 0x30),
            Color::Indexed(17),
            UnderlineKind::Dotted,
            Effect::BOLD | Effect::UNDERLINE,
        );
        let raw = PackedStyle::encode_argb(
            0xff10_2030,
            17,
            Effect::BOLD.bits() | Effect::UNDERLINE.bits() | UnderlineKind::Dotted as u16,
        );
        assert_eq!(typed, raw);
        assert_eq!(typed.foreground(), Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(typed.background(), Color::Indexed(17));
        assert_eq!(typed.underline(), Some(UnderlineKind::Dotted));
    }

    #[test]
    fn from_bits_preserves_foreign_values() {
        let foreign = 0xdead_beef_cafe_f00d;
        assert_eq!(PackedStyle::from_bits(foreign).bits(), foreign);
    }

    #[test]
    fn changing_background_leaves_other_fields_intact() {
        let effect = Effect::BOLD.bits() | Effect::STRIKETHROUGH.bits();
        let before = PackedStyle::encode_argb(0xff01_0203, 17, effect);
        let after = PackedStyle::encode_argb(0xff01_0203, 0xff44_5566, effect);
        assert_eq!(before.foreground_argb(), after.foreground_argb());
        assert_eq!(before.underline_bits(), after.underline_bits());
        assert_eq!(
            before.effect_word() & !(1 << 13),
            after.effect_word() & !(1 << 13)
        );
    }
}
