//! # tinct-scheme — harmony-driven palette generation
//!
//! Derives a three-color palette (primary, secondary, accent) from a
//! base hue and a named color-harmony strategy. One hue plus one harmony
//! plus one random seed produces a complete, reproducible palette.
//!
//! # Architecture
//!
//! ```text
//! Harmony + base_hue + RandomSource
//!     │
//!     ▼
//! harmony.rs: per-role (hue offset, saturation Δ, lightness Δ) table
//!     │
//!     ▼
//! palette.rs: seed draw, shift application, HSL → RGB → hex
//!     │
//!     ▼
//! scheme.rs:  caller-owned (harmony, palette) state value
//! ```
//!
//! # Boundary
//!
//! Colors leave this crate only as 6-digit lowercase hex strings. The
//! engine holds no state of its own: the active harmony and the current
//! palette live in a [`Scheme`] value owned by the caller, and every
//! update replaces the whole value.

// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// f64→f32 truncation is intentional (PRNG values don't need f64 precision).
#![allow(clippy::cast_possible_truncation)]

pub mod harmony;
pub mod palette;
pub mod random;
pub mod scheme;

pub use harmony::{ChannelShift, Harmony};
pub use palette::Palette;
pub use random::{RandomSource, Xorshift32};
pub use scheme::Scheme;
