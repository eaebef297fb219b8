//! Codec registry: the mapping from format identity to encoder
//! implementation that the save path resolves against.

use crate::error::Result;
use crate::format::OutputFormat;
use crate::raster::Raster;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::io::Write;
use std::sync::OnceLock;

pub const DEFAULT_QUALITY: u8 = 80;

/// Encoder parameter set. One knob: the quality level, 0 (maximum
/// compression) to 100 (least lossy). Values are handed to the encoder
/// unvalidated; out-of-range behavior is the encoder's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderParams {
    quality: u8,
}

impl EncoderParams {
    pub fn new(quality: u8) -> Self {
        EncoderParams { quality }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for EncoderParams {
    fn default() -> Self {
        EncoderParams {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// A registered encoder: format identity plus serialization to a byte sink.
pub trait ImageCodec: Send + Sync {
    fn format(&self) -> OutputFormat;

    fn encode(&self, image: &Raster, writer: &mut dyn Write, params: &EncoderParams)
        -> Result<()>;
}

/// Baseline JPEG via the image crate. The underlying encoder clamps quality
/// to 1-100.
struct JpegCodec;

impl ImageCodec for JpegCodec {
    fn format(&self) -> OutputFormat {
        OutputFormat::Jpeg
    }

    fn encode(
        &self,
        image: &Raster,
        writer: &mut dyn Write,
        params: &EncoderParams,
    ) -> Result<()> {
        let rgb = image.to_rgb8();
        let encoder = JpegEncoder::new_with_quality(writer, params.quality());
        encoder.write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}

/// PNG is lossless, so the quality level selects a compression effort tier
/// instead of a fidelity target.
struct PngCodec;

impl ImageCodec for PngCodec {
    fn format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    fn encode(
        &self,
        image: &Raster,
        writer: &mut dyn Write,
        params: &EncoderParams,
    ) -> Result<()> {
        let compression = if params.quality() >= 90 {
            CompressionType::Best
        } else if params.quality() >= 70 {
            CompressionType::Default
        } else {
            CompressionType::Fast
        };

        let rgba = image.to_rgba8();
        let encoder = PngEncoder::new_with_quality(writer, compression, FilterType::Adaptive);
        encoder.write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Mapping from [`OutputFormat`] to an available encoder.
///
/// The save path only reads the registry. Hosts that need a different codec
/// set build their own with [`CodecRegistry::empty`] + [`CodecRegistry::with_codec`].
pub struct CodecRegistry {
    codecs: Vec<Box<dyn ImageCodec>>,
}

impl CodecRegistry {
    /// All built-in codecs.
    pub fn builtin() -> Self {
        CodecRegistry {
            codecs: vec![Box::new(JpegCodec), Box::new(PngCodec)],
        }
    }

    /// No codecs registered; callers opt in with [`CodecRegistry::with_codec`].
    pub fn empty() -> Self {
        CodecRegistry { codecs: Vec::new() }
    }

    /// The process-wide registry, initialized with the built-in codecs on
    /// first use and immutable afterwards.
    pub fn global() -> &'static CodecRegistry {
        static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CodecRegistry::builtin)
    }

    pub fn with_codec(mut self, codec: Box<dyn ImageCodec>) -> Self {
        self.codecs.push(codec);
        self
    }

    /// Look up the encoder for a format. Absence is reported as `None`; the
    /// save operation turns that into [`crate::ImageOpsError::EncoderNotFound`]
    /// up front instead of failing later with something less specific.
    pub fn encoder_for(&self, format: OutputFormat) -> Option<&dyn ImageCodec> {
        self.codecs
            .iter()
            .find(|c| c.format() == format)
            .map(|c| c.as_ref())
    }

    pub fn can_encode(&self, format: OutputFormat) -> bool {
        self.encoder_for(format).is_some()
    }

    pub fn encodable_formats(&self) -> impl Iterator<Item = OutputFormat> + '_ {
        self.codecs.iter().map(|c| c.format())
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        CodecRegistry::builtin()
    }
}
