//! The authenticated session: persisted record, store, and reactive context.
//!
//! INVARIANT
//! =========
//! A session is either entirely absent (logged out) or present with a
//! non-empty bearer token (logged in). A persisted blob that is missing,
//! unparseable, or token-less reads back as absent — never an error.
//!
//! `SessionStore` owns the persisted blob; its three operations are the only
//! way persisted session state changes. `SessionContext` wraps the store in
//! a signal provided at the app root, so writes publish synchronously to
//! every subscriber (guards, navbar) instead of forcing a page reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage::{KeyValueStorage, TabStorage};

/// Storage key for the serialized session blob.
pub const SESSION_KEY: &str = "photoshare_current_user";

/// Persisted record of the current authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub username: String,
    /// Opaque bearer token attached to authenticated requests.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Single source of truth for "is a user authenticated, and with what token",
/// over a pluggable key-value backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the current session. Absent, malformed, and token-less blobs
    /// all count as logged out.
    pub fn get(&self) -> Option<Session> {
        let raw = self.storage.read(SESSION_KEY)?;
        let session: Session = serde_json::from_str(&raw).ok()?;
        if session.token.is_empty() {
            return None;
        }
        Some(session)
    }

    /// Persist `session` as one serialized blob, replacing any prior value.
    pub fn set(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.write(SESSION_KEY, &raw),
            Err(e) => log::warn!("session serialization failed: {e}"),
        }
    }

    /// Remove the persisted session. Safe to call when already absent.
    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
    }
}

fn tab_store() -> SessionStore<TabStorage> {
    SessionStore::new(TabStorage)
}

/// Reactive handle to the session, shared through context.
///
/// Reads go through the signal so subscribers re-render when the session
/// changes; writes persist through the tab store and update the signal in
/// one synchronous step.
#[derive(Clone, Copy)]
pub struct SessionContext {
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            current: RwSignal::new(tab_store().get()),
        }
    }

    /// Current session, tracked.
    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.with(Option::is_some)
    }

    pub fn username(&self) -> Option<String> {
        self.current.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    /// Bearer token, read fresh from the persisted store for request time.
    pub fn token(&self) -> Option<String> {
        tab_store().get().map(|s| s.token)
    }

    /// Persist `session` and publish the change to all subscribers.
    pub fn set(&self, session: Session) {
        tab_store().set(&session);
        self.current.set(Some(session));
    }

    /// Drop the persisted session and publish the change.
    pub fn clear(&self) {
        tab_store().clear();
        self.current.set(None);
    }
}

/// Install the session context at the app root.
pub fn provide_session_context() {
    provide_context(SessionContext::new());
}

/// Get the session context. Panics if `provide_session_context` never ran,
/// which would be a wiring bug in `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
