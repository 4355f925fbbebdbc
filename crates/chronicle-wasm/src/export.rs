//! Inbox CSV export bindings.
//!
//! The admin inbox passes its loaded records back in and downloads the
//! returned CSV text as a blob.

use chronicle_core::export;
use chronicle_core::model::{ContactMessage, Subscriber};
use wasm_bindgen::prelude::*;

fn err_to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Export contact messages as CSV (`Date,Name,Email,Subject,Message,Read`,
/// all fields quoted).
#[wasm_bindgen]
pub fn contacts_to_csv(contacts: JsValue) -> Result<String, JsValue> {
    let contacts: Vec<ContactMessage> =
        serde_wasm_bindgen::from_value(contacts).map_err(err_to_js)?;
    export::contacts_csv(&contacts).map_err(err_to_js)
}

/// Export subscribers as CSV (`Date,Email,Status`, all fields quoted).
#[wasm_bindgen]
pub fn subscribers_to_csv(subscribers: JsValue) -> Result<String, JsValue> {
    let subscribers: Vec<Subscriber> =
        serde_wasm_bindgen::from_value(subscribers).map_err(err_to_js)?;
    export::subscribers_csv(&subscribers).map_err(err_to_js)
}

/// Suggested download name for the contacts export.
#[wasm_bindgen]
pub fn contacts_filename() -> String {
    export::CONTACTS_FILENAME.to_string()
}

/// Suggested download name for the subscribers export.
#[wasm_bindgen]
pub fn subscribers_filename() -> String {
    export::SUBSCRIBERS_FILENAME.to_string()
}
