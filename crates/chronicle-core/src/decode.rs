//! Image decoding for uploaded thumbnails.
//!
//! The crop pipeline accepts whatever the browser file picker hands over,
//! which in practice means JPEG or PNG. The format is guessed from the
//! byte stream rather than trusted from the file name.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::raster::Raster;

/// Errors that can occur while decoding an uploaded image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode JPEG or PNG bytes into a [`Raster`].
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFormat`] if the bytes don't look like a
/// supported image, or [`DecodeError::CorruptedFile`] if decoding fails
/// partway through.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(Raster::from_rgb_image(img.into_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let raster = Raster::new(width, height, vec![128u8; (width * height * 3) as usize]);
        encode_jpeg(&raster, 90).unwrap()
    }

    #[test]
    fn test_decode_valid_jpeg() {
        let bytes = jpeg_bytes(8, 6);
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width, 8);
        assert_eq!(img.height, 6);
        assert_eq!(img.pixels.len(), 8 * 6 * 3);
    }

    #[test]
    fn test_decode_png() {
        // Encode a tiny PNG with the image crate directly
        let rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(rgb)
            .write_to(
                &mut Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let bytes = jpeg_bytes(8, 8);
        let result = decode_image(&bytes[0..20]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }
}
