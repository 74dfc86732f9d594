//! Reactive handle on the session store for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one `SessionStore` and provides an
//! `AuthContext` to the tree. Components read the session through a signal
//! mirror (so guards re-run when it changes, including changes from other
//! tabs) and write only through `login`/`logout`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::session::{PlatformStorage, Session, SessionError, SessionStore};

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    store: StoredValue<SessionStore<PlatformStorage>, LocalStorage>,
}

impl AuthContext {
    /// Mirror `store` into a signal. The store stays owned by this context.
    pub fn new(store: SessionStore<PlatformStorage>) -> Self {
        let session = RwSignal::new(store.snapshot());
        store.subscribe(move |snapshot| session.set(snapshot.clone()));
        Self { session, store: StoredValue::new_local(store) }
    }

    /// Current session, tracked.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Open a session for `role` and `subject_id`, both trimmed of
    /// surrounding whitespace before they are validated and stored.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] for an empty or unknown role or a blank
    /// subject id; the session is unchanged in that case.
    pub fn login(&self, role: &str, subject_id: &str) -> Result<(), SessionError> {
        self.store.with_value(|store| store.login(role, subject_id))
    }

    pub fn logout(&self) {
        self.store.with_value(SessionStore::logout);
    }
}
