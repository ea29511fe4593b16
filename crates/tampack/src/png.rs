//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so that the same hatch maps always
//! encode to byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::texture::RgbBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size (slower, but deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed (faster, but larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGB buffer to a PNG file.
///
/// The image is encoded in memory first, so an encoding failure never leaves
/// a truncated file behind.
pub fn write_rgb(buffer: &RgbBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Write an RGB buffer to any writer.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &RgbBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image has no pixels",
            buffer.width, buffer.height
        )));
    }
    let expected = (buffer.width as usize) * (buffer.height as usize);
    if buffer.data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} pixels for {}x{}, got {}",
            expected,
            buffer.width,
            buffer.height,
            buffer.data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate doesn't add timestamps or other variable metadata
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgb8())?;
    png_writer.finish()?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write RGB to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    buffer: &RgbBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
