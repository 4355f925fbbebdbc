//! Record lifecycle bindings for the admin screens and public forms.
//!
//! Records cross the boundary as plain JS objects via serde-wasm-bindgen.
//! Validation errors come back as string `JsValue`s carrying the inline
//! message to show the user.

use chrono::Utc;
use chronicle_core::model::{self, Article, ContactMessage, Subscriber};
use wasm_bindgen::prelude::*;

fn err_to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Validate an article and derive its save-time fields (slug, read time,
/// default byline, publish stamp). Returns the prepared record to insert
/// or update.
#[wasm_bindgen]
pub fn prepare_article_save(article: JsValue, publish: bool) -> Result<JsValue, JsValue> {
    let mut article: Article = serde_wasm_bindgen::from_value(article).map_err(err_to_js)?;
    article.prepare_save(publish, Utc::now()).map_err(err_to_js)?;
    serde_wasm_bindgen::to_value(&article).map_err(err_to_js)
}

/// Validate an article without mutating it; resolves to nothing or rejects
/// with the inline message.
#[wasm_bindgen]
pub fn validate_article(article: JsValue) -> Result<(), JsValue> {
    let article: Article = serde_wasm_bindgen::from_value(article).map_err(err_to_js)?;
    article.validate().map_err(err_to_js)
}

/// Build the dashboard publish-toggle patch for an article.
#[wasm_bindgen]
pub fn toggle_publish(article: JsValue) -> Result<JsValue, JsValue> {
    let article: Article = serde_wasm_bindgen::from_value(article).map_err(err_to_js)?;
    serde_wasm_bindgen::to_value(&article.toggle_publish(Utc::now())).map_err(err_to_js)
}

/// Build the view-counter increment patch for the article page.
#[wasm_bindgen]
pub fn record_view(article: JsValue) -> Result<JsValue, JsValue> {
    let article: Article = serde_wasm_bindgen::from_value(article).map_err(err_to_js)?;
    serde_wasm_bindgen::to_value(&article.record_view()).map_err(err_to_js)
}

/// Validate a contact-form submission and build the record to insert.
#[wasm_bindgen]
pub fn submit_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<JsValue, JsValue> {
    let record =
        ContactMessage::submit(name, email, subject, message, Utc::now()).map_err(err_to_js)?;
    serde_wasm_bindgen::to_value(&record).map_err(err_to_js)
}

/// Validate a subscribe-form submission against the current subscriber
/// list and build the record to insert. Rejects a duplicate email with the
/// "already subscribed" message and no record.
#[wasm_bindgen]
pub fn subscribe(existing: JsValue, email: &str) -> Result<JsValue, JsValue> {
    let existing: Vec<Subscriber> = serde_wasm_bindgen::from_value(existing).map_err(err_to_js)?;
    let record = model::subscribe(&existing, email, Utc::now()).map_err(err_to_js)?;
    serde_wasm_bindgen::to_value(&record).map_err(err_to_js)
}

/// The category list offered by the article editor.
#[wasm_bindgen]
pub fn categories() -> Vec<String> {
    model::CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_binding() {
        let cats = categories();
        assert_eq!(cats.len(), 10);
        assert!(cats.contains(&"Football".to_string()));
    }
}
