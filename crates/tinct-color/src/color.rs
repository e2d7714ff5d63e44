// SPDX-License-Identifier: MIT
//
// tinct-color color system — hex codec and RGB ↔ HSL conversion.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Error parsing a hex color string.
///
/// The accepted form is exactly six hex digits, with an optional leading
/// `#`. Shorthand (`#rgb`) and alpha (`#rrggbbaa`) forms are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// Wrong number of characters after `#` stripping.
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color on the 0–255 channel scale.
///
/// Channels are `f32` and may be fractional: conversion math carries full
/// precision, and rounding to whole values happens only when formatting
/// to hex. Values produced from out-of-range HSL inputs can fall outside
/// [0, 255]; the hex formatter clamps them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgb {
    /// Red channel, nominally 0–255.
    pub r: f32,
    /// Green channel, nominally 0–255.
    pub g: f32,
    /// Blue channel, nominally 0–255.
    pub b: f32,
}

impl Rgb {
    /// Create a color from raw channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f32::from(r), f32::from(g), f32::from(b))
    }

    /// Parse a 6-hex-digit color string (leading `#` optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ParseHexError`] if the input is not exactly six hex
    /// digits after `#` stripping.
    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        let (r, g, b) = parse_hex_rgb(s)?;
        Ok(Self::from_u8(r, g, b))
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// Each channel is rounded to the nearest integer, then clamped to
    /// [0, 255].
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }

    /// Convert to HSL (hue in degrees, saturation/lightness in percent).
    ///
    /// An achromatic color (all channels equal) reports hue 0 and
    /// saturation 0 by convention.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let delta = max - min;
        if delta < f32::EPSILON {
            // Achromatic: hue is undefined, default to 0.
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Hue is selected by whichever channel is maximal.
        let h = if (max - r).abs() < f32::EPSILON {
            ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) * 60.0
        } else if (max - g).abs() < f32::EPSILON {
            ((b - r) / delta + 2.0) * 60.0
        } else {
            ((r - g) / delta + 4.0) * 60.0
        };

        Hsl::new(h, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL: hue in degrees, saturation and lightness in percent.
///
/// Hue is always normalized to [0, 360). Saturation and lightness are
/// *not* clamped: harmony deltas upstream may push them outside [0, 100],
/// and those values flow through conversion untouched. The per-channel
/// clamp at hex-formatting time bounds the final output.
#[derive(Debug, Clone, Copy)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f32,
    /// Saturation in percent, nominally 0–100.
    pub s: f32,
    /// Lightness in percent, nominally 0–100.
    pub l: f32,
}

impl Hsl {
    /// Create a color, normalizing the hue into [0, 360).
    #[inline]
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h: normalize_hue(h), s, l }
    }

    /// Parse a hex string and convert to HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ParseHexError`] if the input is not a valid 6-hex-digit
    /// string.
    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        Ok(Rgb::from_hex(s)?.to_hsl())
    }

    /// Convert to RGB on the 0–255 scale.
    ///
    /// Channels are left fractional; rounding happens in
    /// [`Rgb::to_hex`].
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let k = |n: f32| (n + self.h / 30.0) % 12.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f32| {
            let k = k(n);
            l - a * (-1.0f32).max((k - 3.0).min((9.0 - k).min(1.0)))
        };

        Rgb::new(255.0 * f(0.0), 255.0 * f(8.0), 255.0 * f(4.0))
    }

    /// Convert straight to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Return a copy with lightness replaced.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f32) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with saturation replaced.
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f32) -> Self {
        Self { s, ..self }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }

    /// Whether this color is achromatic (no visible saturation).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-5
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point.
        const EPS: f32 = 1e-4;
        (self.s - other.s).abs() < EPS
            && (self.l - other.l).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

// ─── Free Conversion Functions ───────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Round a 0–255-scale channel to the nearest integer and clamp.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v + 0.5).clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a strict 6-digit hex color into 8-bit channels.
fn parse_hex_rgb(s: &str) -> Result<(u8, u8, u8), ParseHexError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return Err(ParseHexError::Length(s.len()));
    }

    let bytes = s.as_bytes();
    let r = parse_hex_byte(bytes[0], bytes[1])?;
    let g = parse_hex_byte(bytes[2], bytes[3])?;
    let b = parse_hex_byte(bytes[4], bytes[5])?;
    Ok((r, g, b))
}

fn parse_hex_digit(c: u8) -> Result<u8, ParseHexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseHexError::Digit(char::from(c))),
    }
}

fn parse_hex_byte(hi: u8, lo: u8) -> Result<u8, ParseHexError> {
    Ok(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
