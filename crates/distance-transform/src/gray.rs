//! Adapters between `image::GrayImage` and rasters (feature `image`).

use distance_transform_core::{Raster, RasterError, RasterView};
use image::{GrayImage, Luma};

/// Borrow an `image::GrayImage` as a raster view (`rows = height`,
/// `cols = width`). Zero-valued pixels are background.
pub fn gray_view(img: &GrayImage) -> Result<RasterView<'_, u8>, RasterError> {
    RasterView::new(img.height() as usize, img.width() as usize, img.as_raw())
}

/// Render a distance field as an 8-bit image, `pixel = round(d * scale)`
/// clamped to `0..=255`.
pub fn distance_to_gray(field: &Raster<f32>, scale: f32) -> GrayImage {
    GrayImage::from_fn(field.cols() as u32, field.rows() as u32, |x, y| {
        let d = *field.at(y as usize, x as usize) * scale;
        Luma([d.round().clamp(0.0, 255.0) as u8])
    })
}
