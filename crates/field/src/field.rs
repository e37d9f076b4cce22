//! A seeded population of particles on a fixed-size surface.
//!
//! A [`ParticleField`] is never resized in place. A new surface size means a
//! new field: the old population is dropped and a fresh one is drawn.

use ambient_core::{Surface, Xorshift64};
use glam::DVec2;

use crate::config::FieldConfig;
use crate::input::FrameInput;
use crate::particle::Particle;

/// Particles plus the surface dimensions they live on.
#[derive(Debug, Clone)]
pub struct ParticleField {
    bounds: DVec2,
    particles: Vec<Particle>,
    generation: u64,
}

impl ParticleField {
    /// Seeds `floor(width * height / area_per_particle)` particles, at most
    /// [`MAX_PARTICLES`](crate::config::MAX_PARTICLES).
    ///
    /// Non-positive or non-finite dimensions give an empty field rather than
    /// an error.
    pub fn initialize(
        width: f64,
        height: f64,
        config: &FieldConfig,
        rng: &mut Xorshift64,
    ) -> Self {
        let count = config.particle_count(width, height);
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, width, height, config))
            .collect();
        let usable = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
        let bounds = if usable {
            DVec2::new(width, height)
        } else {
            DVec2::ZERO
        };
        Self {
            bounds,
            particles,
            generation: 0,
        }
    }

    /// Tags the field with the reseed number that produced it.
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn width(&self) -> f64 {
        self.bounds.x
    }

    pub fn height(&self) -> f64 {
        self.bounds.y
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Which reseed produced this population (0 for a standalone field).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves every particle one tick without drawing.
    pub fn update(&mut self, input: &FrameInput, config: &FieldConfig) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds, input, config);
        }
    }

    /// Clears `surface`, then updates and draws each particle in order.
    pub fn tick(&mut self, surface: &mut dyn Surface, input: &FrameInput, config: &FieldConfig) {
        surface.clear();
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds, input, config);
            p.draw(surface);
        }
    }

    /// Draws the current positions without advancing them.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            p.draw(surface);
        }
    }
}
