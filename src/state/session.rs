#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::credentials;

/// Session state derived from the credential store.
///
/// In the Leptos layer this is held in an `RwSignal` provided via context.
/// Absence of a token means "unauthenticated"; no client-side expiry
/// checking is performed, expiry surfaces as a failed request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub active_room_id: Option<String>,
}

impl SessionState {
    /// Load the persisted session at application start.
    pub fn load() -> Self {
        Self {
            token: credentials::read_token(),
            active_room_id: credentials::read_active_room(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Admission decision for a view that requires authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Allow,
    RedirectToLogin,
}

/// Route guard for protected views, evaluated before rendering.
///
/// Pure function of the session at the moment of evaluation. The reverse
/// direction (an authenticated user visiting the login page) is not
/// guarded.
pub fn admit(session: &SessionState) -> Admission {
    if session.is_authenticated() {
        Admission::Allow
    } else {
        Admission::RedirectToLogin
    }
}
