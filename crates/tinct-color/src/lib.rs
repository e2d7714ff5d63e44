// SPDX-License-Identifier: MIT
//
// tinct-color — color primitives for the tinct palette engine.
//
// Everything here is a pure function over small value types: hex strings
// in and out at the boundary, RGB and HSL structs in between. The crate
// deliberately stays in plain sRGB/HSL rather than a perceptual space;
// palette generation upstream is specified in HSL terms and the consuming
// layers only ever see hex strings.
//
// Conversion pipeline:
//
//   hex ↔ Rgb ↔ Hsl
//
// Channel rounding and clamping happen exactly once, at hex-formatting
// time. Until then channels stay fractional so round trips lose at most
// one step per channel.

pub mod color;
pub mod tone;

pub use color::{Hsl, ParseHexError, Rgb};
pub use tone::retone;
