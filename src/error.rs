use thiserror::Error;

use crate::format::OutputFormat;

#[derive(Debug, Error)]
pub enum ImageOpsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Invalid target dimensions: {0}x{1}. Width and height must be non-zero")]
    InvalidDimensions(u32, u32),

    #[error("No encoder registered for {0} output")]
    EncoderNotFound(OutputFormat),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ImageOpsError>;
