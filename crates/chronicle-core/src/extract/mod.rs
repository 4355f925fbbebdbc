//! The crop/rotate extractor behind the thumbnail cropper.
//!
//! The interactive crop widget lets an admin rotate an uploaded image and
//! drag out a selection. What it reports back is a rotation angle and a
//! pixel rectangle in the coordinate space of the *rotated* image's
//! bounding box. This module turns that pair into the final thumbnail:
//! composite the source rotated about the center of a bounding-box-sized
//! canvas, then lift out exactly the requested rectangle.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Positive angles rotate clockwise, matching the crop widget
//! - The crop rectangle is in pixel coordinates of the rotated bounding box
//!
//! Rather than materializing the intermediate rotated canvas, extraction
//! inverse-maps each output pixel through the rotation and samples the
//! source bilinearly. Samples that fall outside the source are black, the
//! same as a transparent canvas flattened to JPEG.

mod bounds;

pub use bounds::rotated_bounds;

use thiserror::Error;

use crate::encode::{encode_jpeg, EXPORT_QUALITY};
use crate::raster::Raster;

/// Pixel-space crop selection within the rotated image's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Left edge, in bounding-box pixels.
    pub x: u32,
    /// Top edge, in bounding-box pixels.
    pub y: u32,
    /// Selection width in pixels. Also the output width.
    pub width: u32,
    /// Selection height in pixels. Also the output height.
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from the widget's fractional pixel values.
    ///
    /// The origin is floored and the size rounded, so a rect that drifts by
    /// a fraction of a pixel during dragging still samples consistently and
    /// keeps its requested dimensions. Sub-pixel drift below zero clamps to
    /// the edge; an origin more than half a pixel negative is rejected,
    /// consistent with [`extract_region`] rejecting overflow on the other
    /// side rather than shifting the sampled region.
    pub fn from_f64(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if x < -0.5 || y < -0.5 || width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Self {
            x: x.max(0.0).floor() as u32,
            y: y.max(0.0).floor() as u32,
            width: width.round() as u32,
            height: height.round() as u32,
        })
    }
}

/// Errors that can occur during crop extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source or the requested output has no pixels to draw on.
    #[error("Render surface unavailable: cannot draw on a zero-sized canvas")]
    RenderSurfaceUnavailable,

    /// The crop rectangle reaches outside the rotated bounding box.
    #[error(
        "Crop rectangle {x},{y} {width}x{height} exceeds the rotated bounds {bounds_width}x{bounds_height}"
    )]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        bounds_width: u32,
        bounds_height: u32,
    },

    /// Encoding the extracted region for upload failed.
    #[error(transparent)]
    Encode(#[from] crate::encode::EncodeError),
}

/// Extract a rotated crop from a source image.
///
/// The output raster is always exactly `crop.width` x `crop.height`, with
/// the crop rectangle's top-left corner landing at (0, 0). The source is
/// not mutated.
///
/// # Errors
///
/// - [`ExtractError::RenderSurfaceUnavailable`] if the source or the crop
///   rectangle is zero-sized
/// - [`ExtractError::CropOutOfBounds`] if the rectangle is not fully inside
///   the rotated bounding box (the widget never produces such a rect, so it
///   is rejected rather than clamped)
pub fn extract_region(
    source: &Raster,
    angle_degrees: f64,
    crop: CropRect,
) -> Result<Raster, ExtractError> {
    if source.is_empty() || crop.width == 0 || crop.height == 0 {
        return Err(ExtractError::RenderSurfaceUnavailable);
    }

    let (bounds_w, bounds_h) = rotated_bounds(source.width, source.height, angle_degrees);
    let within = crop.x as u64 + crop.width as u64 <= bounds_w as u64
        && crop.y as u64 + crop.height as u64 <= bounds_h as u64;
    if !within {
        return Err(ExtractError::CropOutOfBounds {
            x: crop.x,
            y: crop.y,
            width: crop.width,
            height: crop.height,
            bounds_width: bounds_w,
            bounds_height: bounds_h,
        });
    }

    // Zero rotation degenerates to a straight copy of the crop region
    let angle = angle_degrees.rem_euclid(360.0);
    if angle < 0.001 || angle > 359.999 {
        return Ok(copy_region(source, crop));
    }

    let rad = angle.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());

    let src_cx = source.width as f64 / 2.0;
    let src_cy = source.height as f64 / 2.0;
    let bounds_cx = bounds_w as f64 / 2.0;
    let bounds_cy = bounds_h as f64 / 2.0;

    let mut output = vec![0u8; (crop.width * crop.height * 3) as usize];

    for out_y in 0..crop.height {
        for out_x in 0..crop.width {
            // Center of this output pixel on the bounding-box canvas,
            // relative to the canvas center
            let dx = (crop.x + out_x) as f64 + 0.5 - bounds_cx;
            let dy = (crop.y + out_y) as f64 + 0.5 - bounds_cy;

            // Undo the clockwise rotation to find the source position,
            // then shift back from pixel-center to sample-grid coordinates
            let src_x = dx * cos + dy * sin + src_cx - 0.5;
            let src_y = -dx * sin + dy * cos + src_cy - 0.5;

            let pixel = sample_bilinear(source, src_x, src_y);
            let idx = ((out_y * crop.width + out_x) * 3) as usize;
            output[idx..idx + 3].copy_from_slice(&pixel);
        }
    }

    Ok(Raster::new(crop.width, crop.height, output))
}

/// Run the full extract-and-encode tail of the upload pipeline:
/// rotate, crop, and encode as JPEG at [`EXPORT_QUALITY`].
pub fn extract_to_jpeg(
    source: &Raster,
    angle_degrees: f64,
    crop: CropRect,
) -> Result<Vec<u8>, ExtractError> {
    let region = extract_region(source, angle_degrees, crop)?;
    Ok(encode_jpeg(&region, EXPORT_QUALITY)?)
}

/// Straight row-by-row copy for the unrotated case. The crop has already
/// been validated against the source bounds.
fn copy_region(source: &Raster, crop: CropRect) -> Raster {
    let mut output = Vec::with_capacity((crop.width * crop.height * 3) as usize);
    for row in 0..crop.height {
        let src_y = (crop.y + row) as usize;
        let start = (src_y * source.width as usize + crop.x as usize) * 3;
        let end = start + crop.width as usize * 3;
        output.extend_from_slice(&source.pixels[start..end]);
    }
    Raster::new(crop.width, crop.height, output)
}

/// Sample a source pixel with bilinear interpolation, black outside.
fn sample_bilinear(source: &Raster, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (source.width as i64, source.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        // Nearest-pixel fallback along the outer half-pixel rim; pure black
        // beyond the source entirely
        let nx = x.round();
        let ny = y.round();
        if nx >= 0.0 && nx < w as f64 && ny >= 0.0 && ny < h as f64 {
            return source.pixel(nx as u32, ny as u32);
        }
        return [0, 0, 0];
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = source.pixel(x0, y0);
    let p10 = source.pixel(x0 + 1, y0);
    let p01 = source.pixel(x0, y0 + 1);
    let p11 = source.pixel(x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for c in 0..3 {
        let v = p00[c] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[c] as f64 * fx * (1.0 - fy)
            + p01[c] as f64 * (1.0 - fx) * fy
            + p11[c] as f64 * fx * fy;
        result[c] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
