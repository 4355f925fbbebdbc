//! Chronicle WASM - WebAssembly bindings for the Chronicle site core
//!
//! The JavaScript app handles routing, views, and the hosted backend's
//! network calls; everything computational crosses into this crate.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding for uploaded thumbnails
//! - `extract` - The crop/rotate extractor behind the thumbnail cropper
//! - `content` - Slug and read-time derivations
//! - `model` - Record validation and lifecycle patches
//! - `export` - Inbox CSV export
//! - `storage` - Object-storage key derivation
//! - `session` - The session context gating admin routes
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, extract_to_jpeg } from '@chronicle/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const jpeg = extract_to_jpeg(image, rotation, rect.x, rect.y, rect.width, rect.height);
//! ```

use chronicle_core::BackendConfig;
use wasm_bindgen::prelude::*;

mod content;
mod decode;
mod export;
mod extract;
mod model;
mod session;
mod storage;
mod types;

// Re-export public bindings
pub use content::{read_time_minutes, slugify, word_count};
pub use decode::decode_image;
pub use export::{contacts_to_csv, subscribers_to_csv};
pub use extract::{extract_region, extract_to_jpeg, rotated_bounds, JsBounds};
pub use model::{
    categories, prepare_article_save, record_view, submit_contact, subscribe, toggle_publish,
    validate_article,
};
pub use session::SessionHandle;
pub use storage::{image_bucket, image_key_from_url, image_object_key};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Check the backend connection parameters supplied by the build
/// environment. Missing values are logged as console warnings, never a
/// startup failure; returns whether the configuration is complete.
#[wasm_bindgen]
pub fn check_backend_config(url: Option<String>, anon_key: Option<String>) -> bool {
    let config = BackendConfig::new(url, anon_key);
    for warning in config.warnings() {
        gloo_console::warn!(warning);
    }
    config.is_complete()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
