//! Tuning constants of the particle field.
//!
//! Defaults reproduce the reference look. Every constant can be overridden
//! from a JSON params object; anything missing or malformed keeps its
//! default.

use ambient_core::params::{param_color, param_f64, param_positive_f64, param_string};
use ambient_core::TintPalette;
use serde_json::{json, Value};

/// Surface area (px²) per particle: `count = floor(w * h / area)`.
pub const DEFAULT_AREA_PER_PARTICLE: f64 = 14_000.0;
/// Smallest accepted `area_per_particle`; smaller values revert to the default.
pub const MIN_AREA_PER_PARTICLE: f64 = 1.0;
/// Upper bound on the population of one field, whatever the surface size.
pub const MAX_PARTICLES: usize = 10_000;
pub const DEFAULT_SIZE_MIN: f64 = 0.4;
pub const DEFAULT_SIZE_MAX: f64 = 2.4;
pub const DEFAULT_DENSITY_MIN: f64 = 1.0;
pub const DEFAULT_DENSITY_MAX: f64 = 21.0;
/// Velocity components are drawn from `[-drift, drift)`.
pub const DEFAULT_DRIFT: f64 = 0.125;
/// Scroll velocity → vertical displacement factor, per unit density.
pub const DEFAULT_WIND: f64 = 0.04;
pub const DEFAULT_REPULSION_RADIUS: f64 = 180.0;
/// Repulsion displacement at contact, per unit density.
pub const DEFAULT_REPULSION_STRENGTH: f64 = 0.7;
pub const DEFAULT_PALETTE: &str = "cobalt";

/// Resolved tuning of a particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub density_min: f64,
    pub density_max: f64,
    pub drift: f64,
    pub wind: f64,
    pub repulsion_radius: f64,
    pub repulsion_strength: f64,
    pub palette: TintPalette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: DEFAULT_AREA_PER_PARTICLE,
            size_min: DEFAULT_SIZE_MIN,
            size_max: DEFAULT_SIZE_MAX,
            density_min: DEFAULT_DENSITY_MIN,
            density_max: DEFAULT_DENSITY_MAX,
            drift: DEFAULT_DRIFT,
            wind: DEFAULT_WIND,
            repulsion_radius: DEFAULT_REPULSION_RADIUS,
            repulsion_strength: DEFAULT_REPULSION_STRENGTH,
            palette: TintPalette::default(),
        }
    }
}

impl FieldConfig {
    /// Resolves a config from a JSON params object.
    ///
    /// Ranges whose min is not below max revert to the default range; an
    /// unknown palette name reverts to `cobalt` with a warning.
    pub fn from_json(params: &Value) -> Self {
        let (size_min, size_max) = range(
            params,
            ("size_min", DEFAULT_SIZE_MIN),
            ("size_max", DEFAULT_SIZE_MAX),
        );
        let (density_min, density_max) = range(
            params,
            ("density_min", DEFAULT_DENSITY_MIN),
            ("density_max", DEFAULT_DENSITY_MAX),
        );
        let palette_name = param_string(params, "palette", DEFAULT_PALETTE);
        let named = TintPalette::from_name(&palette_name).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to {DEFAULT_PALETTE}");
            TintPalette::default()
        });
        // Individual tints override the named preset.
        let palette = TintPalette::new(
            param_color(params, "primary", named.primary),
            param_color(params, "secondary", named.secondary),
            param_f64(params, "primary_weight", named.primary_weight),
        );

        Self {
            area_per_particle: area_per_particle(params),
            size_min,
            size_max,
            density_min,
            density_max,
            drift: param_f64(params, "drift", DEFAULT_DRIFT).abs(),
            wind: param_f64(params, "wind", DEFAULT_WIND),
            repulsion_radius: param_positive_f64(
                params,
                "repulsion_radius",
                DEFAULT_REPULSION_RADIUS,
            ),
            repulsion_strength: param_f64(
                params,
                "repulsion_strength",
                DEFAULT_REPULSION_STRENGTH,
            ),
            palette,
        }
    }

    /// Current values as a JSON object (palette as its tints).
    pub fn to_json(&self) -> Value {
        json!({
            "area_per_particle": self.area_per_particle,
            "size_min": self.size_min,
            "size_max": self.size_max,
            "density_min": self.density_min,
            "density_max": self.density_max,
            "drift": self.drift,
            "wind": self.wind,
            "repulsion_radius": self.repulsion_radius,
            "repulsion_strength": self.repulsion_strength,
            "palette": self.palette,
        })
    }

    /// Describes every accepted parameter with type, default and meaning.
    pub fn schema() -> Value {
        json!({
            "area_per_particle": {
                "type": "number",
                "default": DEFAULT_AREA_PER_PARTICLE,
                "min": MIN_AREA_PER_PARTICLE,
                "description": "Surface area in px² per particle; count = floor(w * h / area), at most 10000"
            },
            "size_min": {
                "type": "number",
                "default": DEFAULT_SIZE_MIN,
                "description": "Smallest disc radius (inclusive)"
            },
            "size_max": {
                "type": "number",
                "default": DEFAULT_SIZE_MAX,
                "description": "Largest disc radius (exclusive)"
            },
            "density_min": {
                "type": "number",
                "default": DEFAULT_DENSITY_MIN,
                "description": "Smallest response strength to wind and repulsion (inclusive)"
            },
            "density_max": {
                "type": "number",
                "default": DEFAULT_DENSITY_MAX,
                "description": "Largest response strength to wind and repulsion (exclusive)"
            },
            "drift": {
                "type": "number",
                "default": DEFAULT_DRIFT,
                "min": 0.0,
                "description": "Per-axis drift velocity is drawn from [-drift, drift)"
            },
            "wind": {
                "type": "number",
                "default": DEFAULT_WIND,
                "description": "Vertical displacement per unit of scroll velocity and density"
            },
            "repulsion_radius": {
                "type": "number",
                "default": DEFAULT_REPULSION_RADIUS,
                "min": 0.0,
                "description": "Pointer distance below which particles are pushed away"
            },
            "repulsion_strength": {
                "type": "number",
                "default": DEFAULT_REPULSION_STRENGTH,
                "description": "Push at contact, per unit density; falls off linearly to 0 at the radius"
            },
            "palette": {
                "type": "string",
                "default": DEFAULT_PALETTE,
                "options": TintPalette::list_names(),
                "description": "Two-tint palette particles pick from at spawn"
            },
            "primary": {
                "type": "color",
                "default": TintPalette::default().primary,
                "description": "Overrides the palette's primary tint (CSS rgba()/rgb()/#hex)"
            },
            "secondary": {
                "type": "color",
                "default": TintPalette::default().secondary,
                "description": "Overrides the palette's secondary tint"
            },
            "primary_weight": {
                "type": "number",
                "default": TintPalette::default().primary_weight,
                "min": 0.0,
                "max": 1.0,
                "description": "Overrides the probability of spawning with the primary tint"
            }
        })
    }

    /// Number of particles seeded on a `width` × `height` surface.
    ///
    /// Zero for non-positive or non-finite dimensions. Never more than
    /// [`MAX_PARTICLES`], even for a hand-built config with a tiny area.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return 0;
        }
        let count = (width * height / self.area_per_particle).floor();
        if count.is_nan() {
            return 0;
        }
        // `as` saturates, so an infinite quotient lands on the cap too.
        (count as usize).min(MAX_PARTICLES)
    }
}

fn area_per_particle(params: &Value) -> f64 {
    let area = param_positive_f64(params, "area_per_particle", DEFAULT_AREA_PER_PARTICLE);
    if area < MIN_AREA_PER_PARTICLE {
        log::warn!(
            "area_per_particle={area} is below {MIN_AREA_PER_PARTICLE}; using {DEFAULT_AREA_PER_PARTICLE}"
        );
        DEFAULT_AREA_PER_PARTICLE
    } else {
        area
    }
}

fn range(params: &Value, lo: (&str, f64), hi: (&str, f64)) -> (f64, f64) {
    let min = param_f64(params, lo.0, lo.1);
    let max = param_f64(params, hi.0, hi.1);
    if min < max {
        (min, max)
    } else {
        log::warn!(
            "{}={min} is not below {}={max}; using defaults",
            lo.0,
            hi.0
        );
        (lo.1, hi.1)
    }
}
