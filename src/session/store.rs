//! Session store: the single owner of the client's authentication identity.
//!
//! ARCHITECTURE
//! ============
//! The store keeps the current [`Session`] in memory and mirrors it into a
//! [`KeyValueStorage`] under three keys. Reads are served from memory only;
//! `login`/`logout` are the only local writers. Changes written by other tabs
//! arrive through the medium's watch hook and resynchronize the snapshot.
//!
//! PERSISTENCE PROTOCOL
//! ====================
//! The `isAuthenticated` marker is removed first and written last, so any
//! reader (another tab, or a reload after a failed write) sees either a
//! complete identity or no marker at all.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and absorbed: the in-memory snapshot still
//! changes so the current page keeps making correct decisions. Only invalid
//! `login` arguments are reported to the caller.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;

use super::model::Session;
use super::role::Role;
use super::storage::{KeyValueStorage, StorageChange, StorageError};

/// Value stored under the marker key while logged in.
pub const AUTHENTICATED_MARKER: &str = "true";

/// Rejected `login` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("role must not be empty")]
    EmptyRole,
    #[error("unknown role `{0}`")]
    UnknownRole(String),
    #[error("subject id must not be empty")]
    EmptySubjectId,
}

/// Storage key names for the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionKeys {
    pub authenticated: String,
    pub role: String,
    pub subject_id: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            authenticated: "isAuthenticated".to_owned(),
            role: "userRole".to_owned(),
            subject_id: "customerId".to_owned(),
        }
    }
}

impl SessionKeys {
    pub fn contains(&self, key: &str) -> bool {
        key == self.authenticated || key == self.role || key == self.subject_id
    }
}

/// Handle returned by the subscribe calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    Every,
    External,
}

struct Subscriber {
    id: SubscriptionId,
    scope: Scope,
    handler: Rc<dyn Fn(&Session)>,
}

struct Inner<S> {
    storage: S,
    keys: SessionKeys,
    session: RefCell<Session>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

/// Owner of the process-wide session. Clones share state.
pub struct SessionStore<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: KeyValueStorage + 'static> SessionStore<S> {
    /// Load the persisted session from `storage` using the default keys.
    pub fn initialize(storage: S) -> Self {
        Self::initialize_with_keys(storage, SessionKeys::default())
    }

    /// Load the persisted session and start listening for external changes.
    ///
    /// Never fails: unreadable or incomplete state starts the client
    /// logged out.
    pub fn initialize_with_keys(storage: S, keys: SessionKeys) -> Self {
        let session = read_session(&storage, &keys).unwrap_or_else(|e| {
            warn!("could not read persisted session, starting logged out: {e}");
            Session::Anonymous
        });
        if let Some(role) = session.role() {
            info!("restored session with role {role}");
        }

        let store = Self {
            inner: Rc::new(Inner {
                storage,
                keys,
                session: RefCell::new(session),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        };
        store.install_watch();
        store
    }

    fn install_watch(&self) {
        let weak = Rc::downgrade(&self.inner);
        let on_change = move |change: &StorageChange| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let store = SessionStore { inner };
            let relevant = change.key.as_deref().is_none_or(|key| store.inner.keys.contains(key));
            if relevant {
                store.resync();
            }
        };
        if let Err(e) = self.inner.storage.watch(Box::new(on_change)) {
            warn!("cross-tab session sync disabled: {e}");
        }
    }

    /// Current session. No I/O.
    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    /// Persist and publish an authenticated session.
    ///
    /// Surrounding whitespace is trimmed from both `role` and `subject_id`
    /// before validation; the trimmed values are what gets stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when `role` is empty or not a backend role,
    /// or when `subject_id` is blank. The session is left unchanged.
    pub fn login(&self, role: &str, subject_id: &str) -> Result<(), SessionError> {
        let role = match Role::parse(role) {
            None => return Err(SessionError::EmptyRole),
            Some(Role::Unrecognized(raw)) => return Err(SessionError::UnknownRole(raw)),
            Some(role) => role,
        };
        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            return Err(SessionError::EmptySubjectId);
        }

        if let Err(e) = self.persist(&role, subject_id) {
            warn!("session kept in memory only: {e}");
            self.erase();
        }
        info!("logged in with role {role}");
        self.commit(Session::authenticated(role, subject_id));
        Ok(())
    }

    /// Clear the persisted and in-memory session. Idempotent.
    pub fn logout(&self) {
        self.erase();
        if self.commit(Session::Anonymous) {
            info!("logged out");
        }
    }

    /// Call `handler` with the new snapshot after every change, local or
    /// external.
    pub fn subscribe(&self, handler: impl Fn(&Session) + 'static) -> SubscriptionId {
        self.add_subscriber(Scope::Every, Rc::new(handler))
    }

    /// Call `handler` after another tab changed the persisted session and the
    /// snapshot was resynchronized. Local `login`/`logout` never trigger it.
    pub fn subscribe_to_external_change(&self, handler: impl Fn(&Session) + 'static) -> SubscriptionId {
        self.add_subscriber(Scope::External, Rc::new(handler))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Re-read the medium after an external change.
    ///
    /// A failed read keeps the in-memory session.
    pub fn resync(&self) {
        let session = match read_session(&self.inner.storage, &self.inner.keys) {
            Ok(session) => session,
            Err(e) => {
                warn!("ignoring external session change, storage unreadable: {e}");
                return;
            }
        };
        if self.replace(session) {
            info!("session changed in another tab");
            self.notify(Scope::External);
        }
    }

    fn add_subscriber(&self, scope: Scope, handler: Rc<dyn Fn(&Session)>) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber { id, scope, handler });
        id
    }

    fn persist(&self, role: &Role, subject_id: &str) -> Result<(), StorageError> {
        let storage = &self.inner.storage;
        let keys = &self.inner.keys;
        storage.batch(&mut || -> Result<(), StorageError> {
            storage.remove(&keys.authenticated)?;
            storage.set(&keys.subject_id, subject_id)?;
            storage.set(&keys.role, role.as_str())?;
            storage.set(&keys.authenticated, AUTHENTICATED_MARKER)
        })
    }

    fn erase(&self) {
        let storage = &self.inner.storage;
        let keys = &self.inner.keys;
        let _ = storage.batch(&mut || -> Result<(), StorageError> {
            for key in [&keys.authenticated, &keys.role, &keys.subject_id] {
                if let Err(e) = storage.remove(key) {
                    warn!("could not clear persisted session: {e}");
                }
            }
            Ok(())
        });
    }

    /// Swap in `session`; returns whether it differed.
    fn replace(&self, session: Session) -> bool {
        let mut current = self.inner.session.borrow_mut();
        if *current == session {
            return false;
        }
        *current = session;
        true
    }

    fn commit(&self, session: Session) -> bool {
        let changed = self.replace(session);
        if changed {
            self.notify(Scope::Every);
        }
        changed
    }

    /// Local changes reach `Every` subscribers; external ones reach both.
    fn notify(&self, origin: Scope) {
        let handlers: Vec<Rc<dyn Fn(&Session)>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.scope == Scope::Every || origin == Scope::External)
            .map(|s| Rc::clone(&s.handler))
            .collect();
        let snapshot = self.snapshot();
        for handler in handlers {
            handler(&snapshot);
        }
    }
}

fn read_session<S: KeyValueStorage>(storage: &S, keys: &SessionKeys) -> Result<Session, StorageError> {
    let marker = storage.get(&keys.authenticated)?;
    let role = storage.get(&keys.role)?;
    let subject_id = storage.get(&keys.subject_id)?;
    Ok(decode_session(marker.as_deref(), role.as_deref(), subject_id.as_deref()))
}

/// Build a session from raw persisted values. Anything short of a full,
/// well-formed triple is logged out.
pub(crate) fn decode_session(marker: Option<&str>, role: Option<&str>, subject_id: Option<&str>) -> Session {
    if marker.is_none() && role.is_none() && subject_id.is_none() {
        return Session::Anonymous;
    }
    let role = role.and_then(Role::parse);
    let subject_id = subject_id.map(str::trim).filter(|s| !s.is_empty());
    match (marker, role, subject_id) {
        (Some(AUTHENTICATED_MARKER), Some(role), Some(subject_id)) => {
            if !role.is_recognized() {
                warn!("persisted session carries unknown role `{role}`");
            }
            Session::authenticated(role, subject_id)
        }
        _ => {
            warn!("ignoring incomplete persisted session");
            Session::Anonymous
        }
    }
}
