#![deny(unsafe_code)]
//! Core types for the ambient particle field.
//!
//! Provides the [`Surface`] drawing seam, [`Rgba`] tints and
//! [`TintPalette`]s, the [`Xorshift64`] PRNG that makes particle populations
//! reproducible, layer compositing style, JSON parameter helpers and the
//! [`Scene`] recipe used for headless renders.

pub mod color;
pub mod error;
pub mod layer;
pub mod palette;
pub mod params;
pub mod prng;
pub mod scene;
pub mod surface;

pub use color::Rgba;
pub use error::FieldError;
pub use layer::{BlendMode, LayerStyle};
pub use palette::TintPalette;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use surface::Surface;
