//! Article text derivation bindings.

use chronicle_core::content;
use wasm_bindgen::prelude::*;

/// Derive a URL-safe slug from a title.
#[wasm_bindgen]
pub fn slugify(title: &str) -> String {
    content::slugify(title)
}

/// Estimated minutes to read the editor's serialized content
/// (200 words/minute, rounded up, minimum 1).
#[wasm_bindgen]
pub fn read_time_minutes(content: &str) -> u32 {
    content::read_time_minutes(content)
}

/// Plain-text word count of the editor's serialized content.
#[wasm_bindgen]
pub fn word_count(content: &str) -> usize {
    content::word_count(&content::strip_markup(content))
}
