//! A single drifting point and its per-tick update rule.
//!
//! Each tick a particle is blown vertically by scroll wind, drifts by its
//! own constant velocity, is pushed away from a nearby pointer and finally
//! wrapped back onto the surface. Only the position ever changes; every
//! other attribute is fixed at spawn.

use ambient_core::{Rgba, Surface, Xorshift64};
use glam::DVec2;

use crate::config::FieldConfig;
use crate::input::FrameInput;

/// One simulated point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: DVec2,
    /// Spawn position. Not read by the update rule.
    base: DVec2,
    size: f64,
    density: f64,
    velocity: DVec2,
    color: Rgba,
}

impl Particle {
    /// Builds a particle at `position`, recording it as the base position.
    pub fn new(position: DVec2, size: f64, density: f64, velocity: DVec2, color: Rgba) -> Self {
        Self {
            position,
            base: position,
            size,
            density,
            velocity,
            color,
        }
    }

    /// Samples every spawn attribute from `rng`.
    ///
    /// Position is uniform over `[0, width) × [0, height)`; size, density and
    /// both velocity components are uniform over the configured ranges.
    pub fn spawn(rng: &mut Xorshift64, width: f64, height: f64, config: &FieldConfig) -> Self {
        let x = rng.next_range(0.0, width);
        let y = rng.next_range(0.0, height);
        let size = rng.next_range(config.size_min, config.size_max);
        let density = rng.next_range(config.density_min, config.density_max);
        let vx = rng.next_range(-config.drift, config.drift);
        let vy = rng.next_range(-config.drift, config.drift);
        let color = config.palette.pick(rng);
        Self::new(DVec2::new(x, y), size, density, DVec2::new(vx, vy), color)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn base(&self) -> DVec2 {
        self.base
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Advances the particle by one tick on a `bounds.x` × `bounds.y` surface.
    pub fn update(&mut self, bounds: DVec2, input: &FrameInput, config: &FieldConfig) {
        let mut p = self.position;

        p.y += self.velocity.y + input.scroll_velocity * config.wind * self.density;
        p.x += self.velocity.x;

        if let Some(pointer) = input.pointer {
            p += repulsion(
                pointer - p,
                self.density,
                config.repulsion_radius,
                config.repulsion_strength,
            );
        }

        self.position = DVec2::new(wrap(p.x, bounds.x), wrap(p.y, bounds.y));
    }

    /// Fills this particle's disc on `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_disc(self.position, self.size, self.color);
    }
}

/// Displacement applied to a particle whose offset to the pointer is
/// `to_pointer`.
///
/// Points away from the pointer with magnitude
/// `(radius - d) / radius * density * strength`, and is zero when the
/// particle sits exactly on the pointer or `d >= radius`.
pub fn repulsion(to_pointer: DVec2, density: f64, radius: f64, strength: f64) -> DVec2 {
    let distance = to_pointer.length();
    if !(distance > 0.0 && distance < radius) {
        return DVec2::ZERO;
    }
    let force = (radius - distance) / radius;
    -(to_pointer / distance) * force * density * strength
}

/// Wraps one coordinate into `[0, limit)` with a single check.
///
/// Overshooting the far edge lands on 0; undershooting 0 lands on the last
/// representable value below `limit`. NaN lands on 0.
pub fn wrap(v: f64, limit: f64) -> f64 {
    if v < 0.0 {
        just_below(limit)
    } else if v < limit {
        v
    } else {
        0.0
    }
}

fn just_below(limit: f64) -> f64 {
    if limit > 0.0 && limit.is_finite() {
        f64::from_bits(limit.to_bits() - 1)
    } else {
        0.0
    }
}
