//! In-memory RGBA layer implementing [`Surface`].
//!
//! Pixels hold straight (non-premultiplied) float RGBA. Discs are
//! anti-aliased by 4×4 supersampling and blended source-over, which matches
//! what a browser canvas does for translucent fills closely enough for
//! snapshots.

use ambient_core::{FieldError, Rgba, Surface};
use glam::DVec2;

/// Supersampling grid per pixel axis.
const SUBSAMPLES: usize = 4;

/// A transparent RGBA float layer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<[f64; 4]>,
}

impl RasterSurface {
    /// Creates a fully transparent layer.
    ///
    /// Returns `FieldError::InvalidDimensions` for a zero or overflowing size.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![[0.0; 4]; len],
        })
    }

    pub fn width_px(&self) -> usize {
        self.width
    }

    pub fn height_px(&self) -> usize {
        self.height
    }

    /// Row-major straight RGBA, one `[r, g, b, a]` per pixel.
    pub fn pixels(&self) -> &[[f64; 4]] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the layer.
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: usize, y: usize) -> Option<[f64; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Fraction of pixel `(px, py)` covered by the disc.
    fn coverage(px: usize, py: usize, center: DVec2, r2: f64) -> f64 {
        let step = 1.0 / SUBSAMPLES as f64;
        let mut hits = 0usize;
        for j in 0..SUBSAMPLES {
            let sy = py as f64 + (j as f64 + 0.5) * step - center.y;
            for i in 0..SUBSAMPLES {
                let sx = px as f64 + (i as f64 + 0.5) * step - center.x;
                if sx * sx + sy * sy <= r2 {
                    hits += 1;
                }
            }
        }
        hits as f64 / (SUBSAMPLES * SUBSAMPLES) as f64
    }
}

/// Source-over on straight alpha.
fn blend_over(dst: &mut [f64; 4], src: [f64; 3], src_alpha: f64) {
    let out_a = src_alpha + dst[3] * (1.0 - src_alpha);
    if out_a <= 0.0 {
        *dst = [0.0; 4];
        return;
    }
    for c in 0..3 {
        dst[c] = (src[c] * src_alpha + dst[c] * dst[3] * (1.0 - src_alpha)) / out_a;
    }
    dst[3] = out_a;
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    fn fill_disc(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if !(radius > 0.0) || !center.is_finite() || color.a <= 0.0 {
            return;
        }
        let x0 = (center.x - radius).floor().max(0.0);
        let y0 = (center.y - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(self.width as f64);
        let y1 = (center.y + radius).ceil().min(self.height as f64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let [r, g, b, a] = color.channels();
        let r2 = radius * radius;
        for py in y0 as usize..y1 as usize {
            for px in x0 as usize..x1 as usize {
                let cov = Self::coverage(px, py, center, r2);
                if cov > 0.0 {
                    blend_over(&mut self.pixels[py * self.width + px], [r, g, b], a * cov);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_and_overflow() {
        assert!(RasterSurface::new(0, 4).is_err());
        assert!(RasterSurface::new(4, 0).is_err());
        assert!(RasterSurface::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn new_layer_is_transparent() {
        let s = RasterSurface::new(8, 4).unwrap();
        assert_eq!(s.pixels().len(), 32);
        assert!(s.pixels().iter().all(|p| p[3] == 0.0));
        assert_eq!((s.width(), s.height()), (8.0, 4.0));
    }

    #[test]
    fn opaque_disc_fills_its_center_pixel() {
        let mut s = RasterSurface::new(16, 16).unwrap();
        s.fill_disc(DVec2::new(8.0, 8.0), 3.0, Rgba::opaque(255, 0, 0));
        let center = s.pixel(8, 8).unwrap();
        assert_eq!(center, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.pixel(0, 0).unwrap()[3], 0.0);
    }

    #[test]
    fn edge_pixels_are_partially_covered() {
        let mut s = RasterSurface::new(16, 16).unwrap();
        s.fill_disc(DVec2::new(8.0, 8.0), 2.0, Rgba::opaque(255, 255, 255));
        let edge = s.pixel(9, 6).unwrap()[3];
        assert!(edge > 0.0 && edge < 1.0, "edge alpha {edge}");
    }

    #[test]
    fn translucent_discs_accumulate() {
        let mut s = RasterSurface::new(8, 8).unwrap();
        let c = Rgba::new(0, 0, 255, 0.4);
        s.fill_disc(DVec2::new(4.0, 4.0), 3.0, c);
        let once = s.pixel(4, 4).unwrap()[3];
        s.fill_disc(DVec2::new(4.0, 4.0), 3.0, c);
        let twice = s.pixel(4, 4).unwrap()[3];
        assert!((once - 0.4).abs() < 1e-12);
        assert!((twice - 0.64).abs() < 1e-12);
    }

    #[test]
    fn disc_is_clipped_at_edges() {
        let mut s = RasterSurface::new(8, 8).unwrap();
        s.fill_disc(DVec2::new(0.0, 0.0), 2.4, Rgba::opaque(0, 255, 0));
        s.fill_disc(DVec2::new(7.9, 7.9), 2.4, Rgba::opaque(0, 255, 0));
        s.fill_disc(DVec2::new(-50.0, 3.0), 2.4, Rgba::opaque(0, 255, 0));
        assert!(s.pixel(0, 0).unwrap()[3] > 0.0);
        assert!(s.pixel(7, 7).unwrap()[3] > 0.0);
    }

    #[test]
    fn degenerate_discs_draw_nothing() {
        let mut s = RasterSurface::new(8, 8).unwrap();
        s.fill_disc(DVec2::new(4.0, 4.0), 0.0, Rgba::opaque(1, 1, 1));
        s.fill_disc(DVec2::new(f64::NAN, 4.0), 2.0, Rgba::opaque(1, 1, 1));
        s.fill_disc(DVec2::new(4.0, 4.0), 2.0, Rgba::new(1, 1, 1, 0.0));
        assert!(s.pixels().iter().all(|p| p[3] == 0.0));
    }

    #[test]
    fn clear_resets_to_transparent() {
        let mut s = RasterSurface::new(8, 8).unwrap();
        s.fill_disc(DVec2::new(4.0, 4.0), 3.0, Rgba::opaque(9, 9, 9));
        s.clear();
        assert!(s.pixels().iter().all(|p| *p == [0.0; 4]));
    }

    #[test]
    fn smallest_particle_still_leaves_a_mark() {
        let mut s = RasterSurface::new(4, 4).unwrap();
        s.fill_disc(DVec2::new(2.0, 2.0), 0.4, Rgba::opaque(255, 255, 255));
        let total: f64 = s.pixels().iter().map(|p| p[3]).sum();
        assert!(total > 0.0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn alpha_stays_in_unit_range(
                discs in proptest::collection::vec(
                    (-20.0..60.0f64, -20.0..60.0f64, 0.0..6.0f64, 0.0..=1.0f64),
                    1..24,
                ),
            ) {
                let mut s = RasterSurface::new(40, 30).unwrap();
                for (x, y, r, a) in discs {
                    s.fill_disc(DVec2::new(x, y), r, Rgba::new(200, 120, 40, a));
                }
                for p in s.pixels() {
                    prop_assert!((0.0..=1.0).contains(&p[3]));
                    for c in &p[..3] {
                        prop_assert!(*c >= 0.0 && *c <= 1.0 + 1e-9);
                    }
                }
            }
        }
    }
}
