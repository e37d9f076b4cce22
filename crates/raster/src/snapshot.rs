//! PNG snapshots of a composited particle layer.
//!
//! Feature-gated behind `png` (default on) so that embedders that only need
//! the in-memory surface do not pull in the `image` crate.

use ambient_core::{FieldError, LayerStyle, Rgba};
use std::path::Path;

use crate::composite::composite;
use crate::surface::RasterSurface;

/// Writes `layer` composited over `background` as a PNG at `path`.
///
/// Returns `FieldError::InvalidDimensions` if the layer does not fit `u32`
/// image dimensions, or `FieldError::Io` on encode/write failure.
pub fn write_png(
    layer: &RasterSurface,
    background: Rgba,
    style: LayerStyle,
    path: &Path,
) -> Result<(), FieldError> {
    let rgba = composite(layer, background, style);
    let w = u32::try_from(layer.width_px()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(layer.height_px()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| FieldError::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambient_core::Surface;
    use glam::DVec2;

    #[test]
    fn written_png_has_layer_dimensions_and_pixels() {
        let mut layer = RasterSurface::new(24, 16).unwrap();
        layer.fill_disc(DVec2::new(12.0, 8.0), 5.0, Rgba::opaque(255, 255, 255));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.png");

        write_png(&layer, Rgba::opaque(3, 3, 3), LayerStyle::default(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (24, 16));
        assert_eq!(img.get_pixel(0, 0).0, [3, 3, 3, 255]);
        assert!(img.get_pixel(12, 8).0[0] > 3);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let layer = RasterSurface::new(2, 2).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deeper").join("x.png");
        let err = write_png(&layer, Rgba::opaque(0, 0, 0), LayerStyle::default(), &path);
        assert!(matches!(err, Err(FieldError::Io(_))));
    }
}
