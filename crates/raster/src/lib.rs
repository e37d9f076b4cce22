#![deny(unsafe_code)]
//! CPU rendering for the ambient particle field.
//!
//! [`RasterSurface`] is an in-memory [`Surface`](ambient_core::Surface) the
//! simulator can draw into without a browser. [`composite`] flattens it over
//! the backdrop, and with the `png` feature [`snapshot::write_png`] saves the
//! result.

pub mod composite;
pub mod surface;

#[cfg(feature = "png")]
pub mod snapshot;

pub use composite::composite;
pub use surface::RasterSurface;

#[cfg(test)]
mod tests {
    use super::*;
    use ambient_core::{LayerStyle, Rgba};
    use ambient_field::{FieldConfig, FrameLoop, TickOutcome};

    #[test]
    fn frame_loop_draws_into_raster() {
        let mut surface = RasterSurface::new(280, 200).unwrap();
        let mut frame_loop = FrameLoop::new(FieldConfig::default(), 42);
        frame_loop.start(280.0, 200.0);
        frame_loop.on_pointer_move(140.0, 100.0);
        for _ in 0..10 {
            assert_eq!(
                frame_loop.tick(&mut surface),
                TickOutcome::Drawn { particles: 4 }
            );
        }
        assert!(surface.pixels().iter().any(|p| p[3] > 0.0));
    }

    #[test]
    fn identical_runs_composite_identically() {
        let render = || {
            let mut surface = RasterSurface::new(300, 200).unwrap();
            let mut frame_loop = FrameLoop::new(FieldConfig::default(), 7);
            frame_loop.start(300.0, 200.0);
            for i in 0..30 {
                frame_loop.on_scroll(i as f64 * 2.0);
                frame_loop.tick(&mut surface);
            }
            composite(&surface, Rgba::opaque(3, 3, 3), LayerStyle::default())
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn stopped_loop_leaves_last_frame_untouched() {
        let mut surface = RasterSurface::new(280, 200).unwrap();
        let mut frame_loop = FrameLoop::new(FieldConfig::default(), 3);
        frame_loop.start(280.0, 200.0);
        frame_loop.tick(&mut surface);
        let frame = surface.pixels().to_vec();
        frame_loop.stop();
        frame_loop.tick(&mut surface);
        assert_eq!(surface.pixels(), frame.as_slice());
    }
}
