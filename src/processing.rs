use crate::error::{ImageOpsError, Result};
use crate::format::OutputFormat;
use crate::raster::Raster;
use crate::registry::{CodecRegistry, EncoderParams};
use crate::resample;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Performs a high quality resize of the supplied image to the specified
/// dimensions.
///
/// Allocates a fresh `width` x `height` raster, copies the source's
/// resolution metadata onto it, and resamples the full source bounds into
/// the full destination bounds with bicubic interpolation. Kernel taps
/// falling outside the source are resolved by mirroring across the edges
/// (tile-flip wrapping), so border pixels draw on reflected neighbors rather
/// than clamped ones.
///
/// Resizing to the source's own dimensions still resamples: only the
/// dimensions and DPI of the result are guaranteed, not pixel identity.
///
/// # Errors
///
/// * [`ImageOpsError::InvalidDimensions`] if `width` or `height` is zero.
pub fn resize_image(image: &Raster, width: u32, height: u32) -> Result<Raster> {
    if width == 0 || height == 0 {
        return Err(ImageOpsError::InvalidDimensions(width, height));
    }

    debug!(
        "resampling {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );

    let resized = resample::resample(&image.to_rgba8(), width, height);
    Ok(Raster::from_rgba8(resized).with_resolution(image.resolution()))
}

/// Compresses an image to JPEG at the given quality level and saves it to
/// `save_path`, overwriting any existing file.
///
/// The JPEG encoder is resolved from the process-wide [`CodecRegistry`]. The
/// quality level is passed through unvalidated; the built-in encoder clamps
/// it to 1-100. The parent directory must already exist -- this function
/// never creates directories, and a failure mid-write may leave a partial
/// file behind.
///
/// # Errors
///
/// * [`ImageOpsError::EncoderNotFound`] if no JPEG encoder is registered.
/// * [`ImageOpsError::Io`] if `save_path` is not writable.
/// * [`ImageOpsError::ImageProcessing`] if the encoder rejects the raster.
pub fn compress_and_save(image: &Raster, save_path: &Path, quality: u8) -> Result<()> {
    compress_and_save_with(CodecRegistry::global(), image, save_path, quality)
}

/// Same as [`compress_and_save`], resolving the encoder from a caller
/// supplied registry instead of the process-wide one.
pub fn compress_and_save_with(
    registry: &CodecRegistry,
    image: &Raster,
    save_path: &Path,
    quality: u8,
) -> Result<()> {
    let encoder = registry
        .encoder_for(OutputFormat::Jpeg)
        .ok_or(ImageOpsError::EncoderNotFound(OutputFormat::Jpeg))?;

    let params = EncoderParams::new(quality);

    let file = File::create(save_path)?;
    let mut writer = BufWriter::new(file);
    encoder.encode(image, &mut writer, &params)?;
    writer.flush()?;

    debug!("wrote {} at quality {}", save_path.display(), quality);
    Ok(())
}
