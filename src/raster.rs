use crate::error::Result;
use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};
use std::path::Path;

/// Pixel density metadata in dots per inch.
///
/// The `image` crate does not model resolution, so it rides alongside the
/// pixel buffer here and resize operations copy it across unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Resolution {
    /// Standard screen density, the default for rasters with no recorded DPI.
    pub const SCREEN: Resolution = Resolution {
        horizontal: 96.0,
        vertical: 96.0,
    };

    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Resolution {
            horizontal,
            vertical,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::SCREEN
    }
}

/// A decoded raster image together with its resolution metadata.
///
/// Owned and immutable from the perspective of the two operations in
/// [`crate::processing`]: resizing returns a fresh `Raster` with no shared
/// backing memory, and saving only reads the pixels.
#[derive(Debug, Clone)]
pub struct Raster {
    image: DynamicImage,
    resolution: Resolution,
}

impl Raster {
    pub fn new(image: DynamicImage) -> Self {
        Raster {
            image,
            resolution: Resolution::default(),
        }
    }

    pub fn from_rgba8(image: RgbaImage) -> Self {
        Raster::new(DynamicImage::ImageRgba8(image))
    }

    /// Decode a raster from a file on disk.
    pub fn open(path: &Path) -> Result<Self> {
        let image = ImageReader::open(path)?.decode()?;
        Ok(Raster::new(image))
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    pub(crate) fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }

    pub(crate) fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }
}

impl From<DynamicImage> for Raster {
    fn from(image: DynamicImage) -> Self {
        Raster::new(image)
    }
}
