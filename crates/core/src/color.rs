//! RGBA tint type shared by palettes, surfaces and the raster compositor.
//!
//! Colors travel as CSS strings at the edges (scene files, canvas
//! `fillStyle`), so [`Rgba`] parses and prints the CSS forms and serializes
//! through them.

use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB with a floating alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Builds a color, clamping alpha to [0, 1].
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses `rgba(r, g, b, a)`, `rgb(r, g, b)`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid(input));
        }
        let lower = s.to_ascii_lowercase();
        let (body, expect_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid(input));
        };
        let body = body.strip_suffix(')').ok_or_else(|| invalid(input))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        match (parts.as_slice(), expect_alpha) {
            ([r, g, b, a], true) => {
                let alpha: f64 = a.parse().map_err(|_| invalid(input))?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(invalid(input));
                }
                Ok(Self::new(channel(r, input)?, channel(g, input)?, channel(b, input)?, alpha))
            }
            ([r, g, b], false) => Ok(Self::opaque(
                channel(r, input)?,
                channel(g, input)?,
                channel(b, input)?,
            )),
            _ => Err(invalid(input)),
        }
    }

    /// CSS `rgba(r, g, b, a)` form, suitable for a canvas `fillStyle`.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Normalized `[r, g, b, a]` channels in [0, 1].
    pub fn channels(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a,
        ]
    }
}

fn invalid(input: &str) -> FieldError {
    FieldError::InvalidColor(input.to_string())
}

fn channel(s: &str, input: &str) -> Result<u8, FieldError> {
    s.parse::<u8>().map_err(|_| invalid(input))
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)? as f64 / 255.0,
        )),
        _ => None,
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::parse(&s).map_err(serde::de::Error::custom)
    }
}
