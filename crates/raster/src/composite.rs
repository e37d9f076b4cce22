//! Flattens the particle layer over an opaque backdrop into RGBA8.
//!
//! This module is always available (no feature gate) so the PNG snapshot
//! and any other byte-oriented consumer share one conversion.

use ambient_core::{LayerStyle, Rgba};

use crate::surface::RasterSurface;

/// Composites `layer` over `background` with the given opacity and blend.
///
/// The background's own alpha is ignored: the backdrop is always opaque.
/// Output length is `width * height * 4` and every alpha byte is 255.
pub fn composite(layer: &RasterSurface, background: Rgba, style: LayerStyle) -> Vec<u8> {
    let [br, bg, bb, _] = background.channels();
    let backdrop = [br, bg, bb];
    let opacity = style.opacity().clamp(0.0, 1.0);
    let blend = style.blend();

    layer
        .pixels()
        .iter()
        .flat_map(|px| {
            let a = px[3] * opacity;
            let mut out = [0u8, 0, 0, 255];
            for c in 0..3 {
                let blended = blend.apply(backdrop[c], px[c]);
                let v = backdrop[c] * (1.0 - a) + blended * a;
                out[c] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambient_core::{BlendMode, Surface};
    use glam::DVec2;

    fn backdrop() -> Rgba {
        Rgba::opaque(3, 3, 3)
    }

    #[test]
    fn output_has_four_bytes_per_pixel_and_opaque_alpha() {
        let layer = RasterSurface::new(5, 3).unwrap();
        let buf = composite(&layer, backdrop(), LayerStyle::default());
        assert_eq!(buf.len(), 5 * 3 * 4);
        assert!(buf.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn empty_layer_shows_backdrop() {
        let layer = RasterSurface::new(2, 2).unwrap();
        let buf = composite(&layer, backdrop(), LayerStyle::default());
        assert!(buf.chunks(4).all(|px| px == [3, 3, 3, 255]));
    }

    #[test]
    fn full_opacity_normal_shows_the_particle_color() {
        let mut layer = RasterSurface::new(9, 9).unwrap();
        layer.fill_disc(DVec2::new(4.5, 4.5), 4.0, Rgba::opaque(200, 100, 50));
        let buf = composite(&layer, backdrop(), LayerStyle::new(1.0, BlendMode::Normal));
        let i = (4 * 9 + 4) * 4;
        assert_eq!(&buf[i..i + 4], &[200, 100, 50, 255]);
    }

    #[test]
    fn reference_style_lightens_but_stays_dim() {
        let mut layer = RasterSurface::new(9, 9).unwrap();
        layer.fill_disc(DVec2::new(4.5, 4.5), 4.0, Rgba::new(59, 130, 246, 0.4));
        let buf = composite(&layer, backdrop(), LayerStyle::default());
        let i = (4 * 9 + 4) * 4;
        let blue = buf[i + 2];
        assert!(blue > 3, "screen blend should lighten, got {blue}");
        assert!(blue < 100, "40% layer at 40% tint should stay dim, got {blue}");
    }

    #[test]
    fn zero_opacity_hides_the_layer() {
        let mut layer = RasterSurface::new(4, 4).unwrap();
        layer.fill_disc(DVec2::new(2.0, 2.0), 2.0, Rgba::opaque(255, 255, 255));
        let buf = composite(&layer, backdrop(), LayerStyle::new(0.0, BlendMode::Screen));
        assert!(buf.chunks(4).all(|px| px == [3, 3, 3, 255]));
    }
}
