//! JPEG encoding for cropped thumbnail upload.
//!
//! The extractor's output is uploaded as JPEG. Encoding uses the `image`
//! crate's JPEG encoder with a configurable quality setting.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::raster::Raster;

/// Quality used when the crop pipeline encodes its result for upload.
/// Matches the interactive cropper's output setting (0.95).
pub const EXPORT_QUALITY: u8 = 95;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a [`Raster`] to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - RGB image to encode
/// * `quality` - JPEG quality (1-100, clamped; [`EXPORT_QUALITY`] for uploads)
///
/// # Errors
///
/// Returns an error if the raster has zero dimensions, the pixel buffer
/// length doesn't match the dimensions, or encoding fails internally.
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }

    let expected_len = (raster.width as usize) * (raster.height as usize) * 3;
    if raster.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: raster.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn encode_any_small_raster_is_valid_jpeg(
            width in 1u32..32,
            height in 1u32..32,
            seed in 0u8..=255,
        ) {
            let pixels: Vec<u8> = (0..(width * height * 3) as usize)
                .map(|i| (i as u8).wrapping_mul(seed))
                .collect();
            let raster = Raster::new(width, height, pixels);

            let jpeg = encode_jpeg(&raster, EXPORT_QUALITY).unwrap();
            prop_assert!(jpeg.len() > 4);
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        }
    }
}
