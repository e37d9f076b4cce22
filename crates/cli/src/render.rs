//! Headless playback of a [`Scene`] into a raster layer.

use ambient_core::Scene;
use ambient_field::{FieldConfig, FrameLoop};
use ambient_raster::RasterSurface;

use crate::error::CliError;

/// Summary of a finished headless run.
pub struct Playback {
    pub surface: RasterSurface,
    pub particles: usize,
    pub ticks: u64,
}

/// Plays `scene` tick by tick and returns the final frame.
///
/// The pointer (if any) is held still for the whole run and the scroll
/// offset advances by `scroll_per_tick` before every tick, so the first tick
/// sees no wind. With `ticks == 0` the freshly seeded population is drawn
/// once without moving.
pub fn play(scene: &Scene) -> Result<Playback, CliError> {
    scene.validate()?;
    let config = FieldConfig::from_json(&scene.params);
    let mut surface = RasterSurface::new(scene.width, scene.height)?;
    let mut frame_loop = FrameLoop::new(config, scene.seed);
    frame_loop.start(scene.width as f64, scene.height as f64);
    if let Some([x, y]) = scene.pointer {
        frame_loop.on_pointer_move(x, y);
    }

    log::info!(
        "playing {}x{} for {} ticks ({} particles, seed {})",
        scene.width,
        scene.height,
        scene.ticks,
        frame_loop.particle_count(),
        scene.seed
    );

    let mut offset = 0.0;
    for _ in 0..scene.ticks {
        offset += scene.scroll_per_tick;
        frame_loop.on_scroll(offset);
        frame_loop.tick(&mut surface);
    }
    if scene.ticks == 0 {
        if let Some(field) = frame_loop.field() {
            field.draw(&mut surface);
        }
    }

    let particles = frame_loop.particle_count();
    let ticks = frame_loop.ticks();
    frame_loop.stop();
    Ok(Playback {
        surface,
        particles,
        ticks,
    })
}
