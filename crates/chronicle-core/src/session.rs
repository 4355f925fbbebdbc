//! Admin session context.
//!
//! The auth provider owns sign-in itself; this is the application-side
//! session object that gates the admin routes. It starts signed out, is
//! updated by the provider's notifications, and is passed explicitly to
//! whatever needs it instead of living in a global.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Session-changed notifications from the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "session")]
pub enum AuthEvent {
    SignedIn(Session),
    /// Token refresh; carries the replacement session.
    Refreshed(Session),
    SignedOut,
}

/// Application session state with a provider-driven lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    /// Create the signed-out state used at process start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a provider notification.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) | AuthEvent::Refreshed(session) => {
                self.current = Some(session);
            }
            AuthEvent::SignedOut => {
                self.current = None;
            }
        }
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Whether the admin routes should be reachable.
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
