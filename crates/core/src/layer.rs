//! How the particle layer sits on top of the static backdrop.
//!
//! Particles are drawn into a transparent layer which is then composited
//! over an opaque background at a fixed opacity. The reference look is a
//! 40% screen blend over near-black.

use serde::{Deserialize, Serialize};

/// Blend applied when compositing the particle layer onto the backdrop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    #[default]
    Screen,
}

impl BlendMode {
    /// Blends one normalized channel of `src` over `dst`.
    pub fn apply(self, dst: f64, src: f64) -> f64 {
        match self {
            BlendMode::Normal => src,
            BlendMode::Screen => 1.0 - (1.0 - dst) * (1.0 - src),
        }
    }
}

/// Opacity and blend of the particle layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    opacity: f64,
    #[serde(default)]
    blend: BlendMode,
}

impl LayerStyle {
    /// Builds a style with opacity clamped to [0, 1].
    pub fn new(opacity: f64, blend: BlendMode) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            blend,
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn blend(&self) -> BlendMode {
        self.blend
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::new(0.4, BlendMode::Screen)
    }
}
