//! Image decoding bindings.
//!
//! The editor's thumbnail picker hands the selected file's bytes straight
//! to WASM; the decoded raster then feeds the crop widget preview and the
//! extractor.

use crate::types::JsRaster;
use chronicle_core::decode;
use wasm_bindgen::prelude::*;

/// Decode JPEG or PNG bytes into a raster image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
