//! Crop/rotate extraction bindings.
//!
//! The crop widget reports a rotation angle and a pixel rectangle relative
//! to the rotated image's bounding box; these bindings run the extraction
//! and hand back either a raster (for preview) or upload-ready JPEG bytes.

use crate::types::JsRaster;
use chronicle_core::{extract, CropRect};
use wasm_bindgen::prelude::*;

fn crop_rect(x: f64, y: f64, width: f64, height: f64) -> Result<CropRect, JsValue> {
    CropRect::from_f64(x, y, width, height)
        .ok_or_else(|| JsValue::from_str("Crop rectangle has a negative origin or size"))
}

/// Bounding-box dimensions of an image rotated by the given angle.
///
/// This matches the box the crop widget computes its pixel rectangle
/// against, so rectangle validation agrees on both sides.
#[wasm_bindgen]
pub struct JsBounds {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsBounds {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Compute the rotated bounding-box size for a source image.
#[wasm_bindgen]
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> JsBounds {
    let (width, height) = extract::rotated_bounds(width, height, angle_degrees);
    JsBounds { width, height }
}

/// Extract the rotated crop region as a raster.
///
/// The crop rectangle comes in as the widget's fractional pixel values and
/// is floored/rounded consistently on this side.
#[wasm_bindgen]
pub fn extract_region(
    image: &JsRaster,
    angle_degrees: f64,
    crop_x: f64,
    crop_y: f64,
    crop_width: f64,
    crop_height: f64,
) -> Result<JsRaster, JsValue> {
    let crop = crop_rect(crop_x, crop_y, crop_width, crop_height)?;
    extract::extract_region(&image.to_raster(), angle_degrees, crop)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract the rotated crop region and encode it as JPEG for upload.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = extract_to_jpeg(image, rotation, rect.x, rect.y, rect.width, rect.height);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn extract_to_jpeg(
    image: &JsRaster,
    angle_degrees: f64,
    crop_x: f64,
    crop_y: f64,
    crop_width: f64,
    crop_height: f64,
) -> Result<Vec<u8>, JsValue> {
    let crop = crop_rect(crop_x, crop_y, crop_width, crop_height)?;
    extract::extract_to_jpeg(&image.to_raster(), angle_degrees, crop)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsRaster {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsRaster::new(width, height, pixels)
    }

    #[test]
    fn test_rotated_bounds_quarter_turn() {
        let bounds = rotated_bounds(100, 50, 90.0);
        assert_eq!(bounds.width(), 50);
        assert_eq!(bounds.height(), 100);
    }

    #[test]
    fn test_extract_region_dimensions() {
        let img = test_image(100, 100);
        let out = extract_region(&img, 45.0, 0.0, 0.0, 40.0, 30.0).unwrap();
        assert_eq!(out.width(), 40);
        assert_eq!(out.height(), 30);
    }

    #[test]
    fn test_extract_region_fractional_rect() {
        let img = test_image(100, 100);
        let out = extract_region(&img, 0.0, 10.6, 10.2, 49.7, 50.4).unwrap();
        assert_eq!(out.width(), 50);
        assert_eq!(out.height(), 50);
    }

    #[test]
    fn test_extract_to_jpeg_magic_bytes() {
        let img = test_image(64, 64);
        let jpeg = extract_to_jpeg(&img, 15.0, 0.0, 0.0, 32.0, 32.0).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
