//! Color-harmony strategies — hue geometry as data.
//!
//! Each harmony maps a seed (hue, saturation, lightness) to three related
//! HSL triples by applying fixed per-role shifts. The first role
//! (primary) always carries the seed unshifted.

use tinct_color::Hsl;

/// A per-role adjustment applied to the HSL seed.
///
/// The hue offset adds modulo 360. Saturation and lightness deltas add
/// without clamping: extreme seeds can land outside [0, 100], and the
/// result flows into conversion as-is. The channel clamp at
/// hex-formatting time bounds the final output, at the cost of gamut
/// drift for very dark or desaturated seeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelShift {
    /// Degrees added to the seed hue (wrapped into [0, 360)).
    pub hue: f32,
    /// Percentage points added to the seed saturation.
    pub saturation: f32,
    /// Percentage points added to the seed lightness.
    pub lightness: f32,
}

impl ChannelShift {
    const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Apply this shift to a seed color.
    #[must_use]
    pub fn apply(self, seed: Hsl) -> Hsl {
        Hsl::new(
            seed.h + self.hue,
            seed.s + self.saturation,
            seed.l + self.lightness,
        )
    }
}

/// The kind of harmony used to derive secondary and accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Single hue, varied saturation and lightness.
    Monochromatic,
    /// Opposite side of the color wheel (+180°).
    Complementary,
    /// 120-degree spacing.
    Triadic,
    /// The complement's neighbors (+150°, +210°).
    SplitComplementary,
    /// Adjacent hues (+30°, +60°).
    Analogous,
    /// 90-degree spacing (double complementary).
    Tetradic,
}

impl Harmony {
    /// The per-role shifts for this harmony: primary, secondary, accent.
    #[must_use]
    pub const fn shifts(self) -> [ChannelShift; 3] {
        const SEED: ChannelShift = ChannelShift::new(0.0, 0.0, 0.0);
        match self {
            Self::Monochromatic => [
                SEED,
                ChannelShift::new(0.0, -20.0, 15.0),
                ChannelShift::new(0.0, 10.0, -20.0),
            ],
            Self::Complementary => [
                SEED,
                ChannelShift::new(180.0, -10.0, 0.0),
                ChannelShift::new(180.0, 0.0, -15.0),
            ],
            Self::Triadic => [
                SEED,
                ChannelShift::new(120.0, -5.0, 5.0),
                ChannelShift::new(240.0, 5.0, -5.0),
            ],
            Self::SplitComplementary => [
                SEED,
                ChannelShift::new(150.0, -10.0, 10.0),
                ChannelShift::new(210.0, 5.0, -5.0),
            ],
            Self::Analogous => [
                SEED,
                ChannelShift::new(30.0, -5.0, 5.0),
                ChannelShift::new(60.0, 5.0, -10.0),
            ],
            Self::Tetradic => [
                SEED,
                ChannelShift::new(90.0, -10.0, 5.0),
                ChannelShift::new(180.0, 5.0, -5.0),
            ],
        }
    }

    /// Cyclic successor. Advancing past the last harmony wraps to the
    /// first; six applications return the start value.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Monochromatic => Self::Complementary,
            Self::Complementary => Self::Triadic,
            Self::Triadic => Self::SplitComplementary,
            Self::SplitComplementary => Self::Analogous,
            Self::Analogous => Self::Tetradic,
            Self::Tetradic => Self::Monochromatic,
        }
    }

    /// Human-readable name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Analogous => "analogous",
            Self::Tetradic => "tetradic",
        }
    }

    /// Parse a harmony from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmonies, in cycle order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Complementary,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Analogous,
            Self::Tetradic,
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
