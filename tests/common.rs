use image::{Rgba, RgbaImage};
use img_press::Raster;

/// Solid-color raster for scenario tests.
pub fn solid_raster(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    Raster::from_rgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// Diagonal gradient raster; enough detail that JPEG quality changes the
/// output size.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut img = RgbaImage::new(width, height);
    for (x, y, p) in img.enumerate_pixels_mut() {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        let b = (((x + y) * 127) / (width + height).max(1)) as u8;
        *p = Rgba([r, g, b, 255]);
    }
    Raster::from_rgba8(img)
}
