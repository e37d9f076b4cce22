//! Two-tint weighted palettes for particle coloring.
//!
//! Each particle picks one of two tints at spawn: `primary` with probability
//! `primary_weight`, otherwise `secondary`. The pick is never revisited.

use crate::color::Rgba;
use crate::error::FieldError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

const PALETTE_NAMES: &[&str] = &["cobalt", "ember", "mint", "mono"];

/// A weighted choice between two tints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintPalette {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Probability of picking `primary`, in [0, 1].
    pub primary_weight: f64,
}

impl TintPalette {
    /// Builds a palette, clamping the weight to [0, 1].
    pub fn new(primary: Rgba, secondary: Rgba, primary_weight: f64) -> Self {
        Self {
            primary,
            secondary,
            primary_weight: primary_weight.clamp(0.0, 1.0),
        }
    }

    /// Draws a tint for a newly spawned particle.
    pub fn pick(&self, rng: &mut Xorshift64) -> Rgba {
        if rng.chance(self.primary_weight) {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Translucent blue over indigo. The reference look.
    pub fn cobalt() -> Self {
        Self::new(
            Rgba::new(59, 130, 246, 0.4),
            Rgba::new(99, 102, 241, 0.2),
            0.4,
        )
    }

    /// Warm orange sparks over dim red.
    pub fn ember() -> Self {
        Self::new(
            Rgba::new(251, 146, 60, 0.45),
            Rgba::new(185, 28, 28, 0.2),
            0.35,
        )
    }

    /// Teal over green.
    pub fn mint() -> Self {
        Self::new(
            Rgba::new(45, 212, 191, 0.4),
            Rgba::new(34, 197, 94, 0.2),
            0.4,
        )
    }

    /// White dust over gray.
    pub fn mono() -> Self {
        Self::new(
            Rgba::new(255, 255, 255, 0.35),
            Rgba::new(148, 163, 184, 0.2),
            0.3,
        )
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "cobalt" => Ok(Self::cobalt()),
            "ember" => Ok(Self::ember()),
            "mint" => Ok(Self::mint()),
            "mono" => Ok(Self::mono()),
            _ => Err(FieldError::UnknownPalette(name.to_string())),
        }
    }

    /// Names accepted by [`TintPalette::from_name`].
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }
}

impl Default for TintPalette {
    fn default() -> Self {
        Self::cobalt()
    }
}
