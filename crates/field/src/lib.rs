#![deny(unsafe_code)]
//! Ambient particle field simulator.
//!
//! A fixed population of small translucent discs drifts across a 2D
//! surface. Each tick every particle:
//!
//! 1. is blown vertically by scroll wind (`scroll_velocity * wind * density`),
//! 2. drifts by its constant velocity,
//! 3. is pushed away from the pointer when closer than the repulsion radius,
//!    with linear falloff,
//! 4. wraps around the surface edges.
//!
//! [`FrameLoop`] wraps a [`ParticleField`] with the host-facing lifecycle:
//! `start`, `on_resize` (full reseed), `stop`, and latest-value input.

pub mod config;
pub mod field;
pub mod frame_loop;
pub mod input;
pub mod particle;

pub use config::FieldConfig;
pub use field::ParticleField;
pub use frame_loop::{FrameLoop, LoopState, TickOutcome};
pub use input::{FrameInput, InputSample, ScrollTracker};
pub use particle::Particle;
