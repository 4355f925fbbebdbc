//! Object-storage key bindings for article image upload and deletion.

use chrono::Utc;
use chronicle_core::storage;
use wasm_bindgen::prelude::*;

/// Generate the storage key for an uploaded image file: random token,
/// millisecond timestamp, and the file's extension.
#[wasm_bindgen]
pub fn image_object_key(file_name: &str) -> String {
    storage::object_key(file_name, Utc::now())
}

/// Recover the bucket-relative key from a public image URL, for deletion.
/// Returns undefined for URLs outside the image bucket.
#[wasm_bindgen]
pub fn image_key_from_url(url: &str) -> Option<String> {
    storage::key_from_url(url).map(|k| k.to_string())
}

/// Name of the bucket holding article images.
#[wasm_bindgen]
pub fn image_bucket() -> String {
    storage::IMAGE_BUCKET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_object_key_keeps_extension() {
        let key = image_object_key("header.PNG");
        assert!(key.ends_with(".png"), "key was {}", key);
    }

    #[test]
    fn test_image_key_from_url() {
        let url = "https://proj.supabase.co/storage/v1/object/public/article-images/k-1.jpg";
        assert_eq!(image_key_from_url(url), Some("k-1.jpg".to_string()));
        assert_eq!(image_key_from_url("https://example.com/x.jpg"), None);
    }
}
