//! Session context binding.
//!
//! The JS shell creates one handle at startup, forwards the auth
//! provider's notifications into it, and asks it whether the admin routes
//! are reachable. This keeps session state in one explicitly owned object
//! instead of a mutable global.

use chrono::Utc;
use chronicle_core::session::{AuthEvent, Session, SessionState};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

/// Application session state with a provider-driven lifecycle.
#[wasm_bindgen]
#[derive(Default)]
pub struct SessionHandle {
    state: SessionState,
}

#[wasm_bindgen]
impl SessionHandle {
    /// Create the signed-out state used at startup.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SessionHandle {
        SessionHandle {
            state: SessionState::new(),
        }
    }

    /// Forward the provider's signed-in notification.
    pub fn signed_in(&mut self, user_id: &str, email: &str) -> Result<(), JsValue> {
        self.state.apply(AuthEvent::SignedIn(parse_session(user_id, email)?));
        Ok(())
    }

    /// Forward a token-refresh notification.
    pub fn refreshed(&mut self, user_id: &str, email: &str) -> Result<(), JsValue> {
        self.state.apply(AuthEvent::Refreshed(parse_session(user_id, email)?));
        Ok(())
    }

    /// Forward the signed-out notification (or an explicit sign-out).
    pub fn signed_out(&mut self) {
        self.state.apply(AuthEvent::SignedOut);
    }

    /// Whether the admin routes should be reachable.
    pub fn is_signed_in(&self) -> bool {
        self.state.is_signed_in()
    }

    /// Email of the signed-in admin, if any.
    pub fn current_email(&self) -> Option<String> {
        self.state.current().map(|s| s.email.clone())
    }
}

fn parse_session(user_id: &str, email: &str) -> Result<Session, JsValue> {
    let user_id = Uuid::parse_str(user_id)
        .map_err(|e| JsValue::from_str(&format!("Invalid user id: {}", e)))?;
    Ok(Session {
        user_id,
        email: email.to_string(),
        signed_in_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "9b2c8f2e-3f6a-4e0d-8a61-2f9d54f4a3b1";

    #[test]
    fn test_lifecycle() {
        let mut handle = SessionHandle::new();
        assert!(!handle.is_signed_in());

        handle.signed_in(USER, "ed@example.com").unwrap();
        assert!(handle.is_signed_in());
        assert_eq!(handle.current_email(), Some("ed@example.com".to_string()));

        handle.signed_out();
        assert!(!handle.is_signed_in());
        assert_eq!(handle.current_email(), None);
    }

    #[test]
    fn test_refresh_keeps_signed_in() {
        let mut handle = SessionHandle::new();
        handle.signed_in(USER, "ed@example.com").unwrap();
        handle.refreshed(USER, "ed@example.com").unwrap();
        assert!(handle.is_signed_in());
    }
}
