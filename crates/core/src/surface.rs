//! The drawing seam between the simulator and whatever host displays it.
//!
//! A browser canvas, an in-memory raster and a test recorder all implement
//! [`Surface`]. The trait is object-safe so the frame loop can draw through
//! `&mut dyn Surface` without knowing the host.

use crate::color::Rgba;
use glam::DVec2;

/// A 2D raster target that particles are drawn onto.
pub trait Surface {
    /// Width in logical pixels.
    fn width(&self) -> f64;

    /// Height in logical pixels.
    fn height(&self) -> f64;

    /// Erases everything drawn since the previous clear.
    fn clear(&mut self);

    /// Fills a disc of `radius` centered at `center`. No stroke.
    fn fill_disc(&mut self, center: DVec2, radius: f64, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        discs: Vec<(DVec2, f64, Rgba)>,
    }

    impl Surface for Recorder {
        fn width(&self) -> f64 {
            64.0
        }

        fn height(&self) -> f64 {
            32.0
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.discs.clear();
        }

        fn fill_disc(&mut self, center: DVec2, radius: f64, color: Rgba) {
            self.discs.push((center, radius, color));
        }
    }

    #[test]
    fn surface_is_object_safe() {
        let mut recorder = Recorder::default();
        let surface: &mut dyn Surface = &mut recorder;
        surface.fill_disc(DVec2::new(1.0, 2.0), 0.5, Rgba::opaque(1, 2, 3));
        surface.clear();
        surface.fill_disc(DVec2::new(3.0, 4.0), 1.5, Rgba::opaque(4, 5, 6));
        assert_eq!(surface.width(), 64.0);
        assert_eq!(surface.height(), 32.0);
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.discs.len(), 1);
        assert_eq!(recorder.discs[0].0, DVec2::new(3.0, 4.0));
    }

    #[test]
    fn boxed_surface_works() {
        let boxed: Box<dyn Surface> = Box::new(Recorder::default());
        assert_eq!(boxed.width(), 64.0);
    }
}
