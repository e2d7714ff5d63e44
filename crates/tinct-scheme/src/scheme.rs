//! Caller-owned scheme state.
//!
//! The surrounding application tracks which harmony is active and which
//! palette is current. That state lives here as a plain value: the
//! engine's functions take a [`Scheme`] and return a new one, and the
//! caller replaces its copy wholesale. Nothing is mutated in place, so a
//! failed or abandoned generation can never corrupt the palette the
//! caller already holds.

use crate::harmony::Harmony;
use crate::palette::Palette;
use crate::random::RandomSource;

/// The active harmony and its current palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Strategy used for the current palette and the next reroll.
    pub harmony: Harmony,
    /// The palette generated most recently under `harmony`.
    pub palette: Palette,
}

impl Scheme {
    /// Start a scheme under the given harmony with a random palette.
    #[must_use]
    pub fn new(harmony: Harmony, rng: &mut dyn RandomSource) -> Self {
        Self {
            harmony,
            palette: Palette::random(harmony, rng),
        }
    }

    /// Fresh random palette under the same harmony.
    #[must_use]
    pub fn reroll(&self, rng: &mut dyn RandomSource) -> Self {
        Self {
            harmony: self.harmony,
            palette: Palette::random(self.harmony, rng),
        }
    }

    /// Advance to the next harmony, then reroll under it.
    #[must_use]
    pub fn cycle(&self, rng: &mut dyn RandomSource) -> Self {
        let harmony = self.harmony.next();
        Self {
            harmony,
            palette: Palette::random(harmony, rng),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
