//! Session context for the application.
//!
//! Every screen reads and mutates the session through [`SessionHandle`]
//! instead of touching localStorage directly; the handle keeps the signal
//! and the persistent store in step. [`SessionHandle::expire`] is the single
//! choke point for 401 responses: it clears the session and sends the user
//! back to the login screen.

use dioxus::prelude::*;
use store::{platform_backend, Session, SessionBackend, SessionStore};

fn session_store() -> SessionStore<impl SessionBackend + Clone> {
    SessionStore::new(platform_backend())
}

/// Get the current session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Typed read/write/clear access to the active session.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<Session>,
}

impl SessionHandle {
    pub fn session(&self) -> Session {
        (self.state)()
    }

    pub fn is_authenticated(&self) -> bool {
        (self.state)().is_authenticated()
    }

    /// The bearer token, or an empty string when signed out. The remote API
    /// rejects the empty token with 401, which routes back through
    /// [`expire`](Self::expire).
    ///
    /// Reads without subscribing, so fetch effects do not rerun when the
    /// session changes out from under them.
    pub fn token(&self) -> String {
        self.state.peek().token.clone().unwrap_or_default()
    }

    /// Persist a fresh session after login or signup.
    pub fn sign_in(&mut self, session: Session) {
        session_store().save(&session);
        self.state.set(session);
    }

    /// Explicit logout: drop the persisted slots and the in-memory state.
    pub fn sign_out(&mut self) {
        session_store().clear();
        self.state.set(Session::default());
    }

    /// Forced logout on an unauthorized response: clear the session and
    /// return to the login screen.
    pub fn expire(&mut self) {
        tracing::warn!("session expired, redirecting to login");
        self.sign_out();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }
}

/// Provider component owning the session signal. Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| session_store().load());
    use_context_provider(|| SessionHandle { state });

    rsx! {
        {children}
    }
}
