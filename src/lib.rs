pub mod error;
pub mod format;
pub mod processing;
pub mod raster;
pub mod registry;
mod resample;

pub use error::{ImageOpsError, Result};
pub use format::OutputFormat;
pub use processing::{compress_and_save, compress_and_save_with, resize_image};
pub use raster::{Raster, Resolution};
pub use registry::{CodecRegistry, EncoderParams, ImageCodec, DEFAULT_QUALITY};
