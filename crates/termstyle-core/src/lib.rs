#![forbid(unsafe_code)]

//! Host-agnostic packed per-cell style codec for terminal emulators.
//!
//! `termstyle-core` is the style model shared by a terminal's grid storage
//! and its renderer. Each character cell records its visual appearance as a
//! single 64-bit [`PackedStyle`] — foreground color, background color,
//! underline kind, and attribute flags — compact enough for millions of
//! cells and cheap enough to re-encode on every screen redraw.
//!
//! # Primary responsibilities
//!
//! - **PackedStyle**: the fixed 64-bit bit layout and its encode/decode
//!   operations, including the dual indexed/truecolor color representation.
//! - **Color**: the tagged-union color type (`Indexed` vs `Rgb`) and the
//!   32-bit `0xFFRRGGBB` classification convention.
//! - **Effect / UnderlineKind**: the caller-visible attribute flags and the
//!   underline style selector.
//! - **Palette**: the 259-entry indexed color table the decoded indices
//!   refer to (256 standard slots plus default-fg/default-bg/cursor).
//!
//! # Design principles
//!
//! - **Pure and total**: every operation is a referentially transparent bit
//!   transform; out-of-range inputs are masked, never rejected.
//! - **Stateless**: no shared mutable state, safe to call from any thread.
//! - **Wire-stable**: the bit layout never changes; persisted raw values
//!   stay interoperable across components.
//! - **`#![forbid(unsafe_code)]`**: safety enforced at compile time.

pub mod color;
pub mod palette;
pub mod style;

pub use color::{
    COLOR_INDEX_BACKGROUND, COLOR_INDEX_CURSOR, COLOR_INDEX_FOREGROUND, Color, NUM_INDEXED_COLORS,
};
pub use palette::Palette;
pub use style::{Effect, PackedStyle, UnderlineKind};
