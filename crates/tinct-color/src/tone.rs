// SPDX-License-Identifier: MIT
//
// Lightness retoning — tonal variants of a seed color.
//
// Consumers derive lighter borders, darker accents, and surface tints
// from a palette color on demand. The variant is recomputed every time;
// it is never stored alongside the palette.

use crate::color::{Hsl, ParseHexError};

/// Retone a hex color to an absolute lightness, preserving hue and
/// saturation.
///
/// The pipeline is hex → RGB → HSL, lightness replaced with
/// `lightness` (percent), then HSL → RGB → hex. Hue and saturation
/// survive the round trip up to channel-rounding tolerance.
///
/// # Errors
///
/// Returns [`ParseHexError`] if `hex` is not a valid 6-hex-digit string.
pub fn retone(hex: &str, lightness: f32) -> Result<String, ParseHexError> {
    let hsl = Hsl::from_hex(hex)?;
    Ok(hsl.with_lightness(lightness).to_hex())
}
