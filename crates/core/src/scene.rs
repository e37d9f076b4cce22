//! Reproducible recipe for a headless particle-field render.
//!
//! A [`Scene`] captures everything a render depends on: surface size, PRNG
//! seed, tick count, tuning parameters and the scripted input (a fixed
//! pointer and a constant scroll speed). Two identical scenes produce
//! bit-identical images.

use crate::color::Rgba;
use crate::error::FieldError;
use crate::layer::LayerStyle;
use serde::{Deserialize, Serialize};

fn default_background() -> Rgba {
    Rgba::opaque(3, 3, 3)
}

/// Reproducible recipe for a headless render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    #[serde(default)]
    pub ticks: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    /// Pointer position held for the whole run; `None` means no pointer.
    #[serde(default)]
    pub pointer: Option<[f64; 2]>,
    /// Scroll offset added before every tick (i.e. the scroll velocity).
    #[serde(default)]
    pub scroll_per_tick: f64,
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default)]
    pub layer: LayerStyle,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Scene {
    /// A scene with no input, no ticks, empty params and the reference look.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ticks: 0,
            params: empty_params(),
            pointer: None,
            scroll_per_tick: 0.0,
            background: default_background(),
            layer: LayerStyle::default(),
        }
    }

    /// Checks dimensions and scripted input.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(FieldError::InvalidScene(
                "params must be a JSON object".to_string(),
            ));
        }
        if let Some([x, y]) = self.pointer {
            if !x.is_finite() || !y.is_finite() {
                return Err(FieldError::InvalidScene(format!(
                    "pointer must be finite, got ({x}, {y})"
                )));
            }
        }
        if !self.scroll_per_tick.is_finite() {
            return Err(FieldError::InvalidScene(
                "scroll_per_tick must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
