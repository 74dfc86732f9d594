//! Durable key-value medium backing the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads by living in a string key-value store shared
//! by every tab of the same origin. In the browser that is `localStorage`;
//! on the host (tests, non-`csr` builds) it is an in-memory medium whose
//! handles stand in for tabs.
//!
//! CHANGE NOTIFICATION
//! ===================
//! `watch` only reports changes made through *other* handles, matching the
//! browser `storage` event which never fires in the tab that wrote.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Failure talking to the durable medium.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to watch storage: {0}")]
    Watch(String),
}

/// A change made to the medium by another tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    /// Key that changed; `None` when the whole medium was cleared.
    pub key: Option<String>,
}

pub type ChangeHandler = Box<dyn Fn(&StorageChange)>;

/// String key-value storage shared across tabs.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Register `on_change` for changes made by other tabs.
    fn watch(&self, on_change: ChangeHandler) -> Result<(), StorageError>;

    /// Run `writes` so other tabs observe their effect only once all of them
    /// are done. The browser already delivers `storage` events after the
    /// writing task, so the default just runs `writes`.
    fn batch(&self, writes: &mut dyn FnMut() -> Result<(), StorageError>) -> Result<(), StorageError> {
        writes()
    }
}

#[cfg(feature = "csr")]
pub type PlatformStorage = BrowserStorage;
#[cfg(not(feature = "csr"))]
pub type PlatformStorage = MemoryStorage;

/// Open the medium for the current build target.
pub fn platform_storage() -> PlatformStorage {
    #[cfg(feature = "csr")]
    {
        BrowserStorage::local()
    }
    #[cfg(not(feature = "csr"))]
    {
        MemoryStorage::new()
    }
}

// =============================================================================
// IN-MEMORY MEDIUM
// =============================================================================

struct Watcher {
    origin: u64,
    handler: Rc<dyn Fn(&StorageChange)>,
}

#[derive(Default)]
struct Medium {
    entries: HashMap<String, String>,
    watchers: Vec<Watcher>,
    next_origin: u64,
    batch_depth: usize,
    /// Changes held back while a batch is open: writer origin and key.
    pending: Vec<(u64, Option<String>)>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory medium. Clones share the same tab; [`MemoryStorage::sibling`]
/// opens another tab on the same medium.
#[derive(Clone)]
pub struct MemoryStorage {
    medium: Rc<RefCell<Medium>>,
    origin: u64,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        let medium = Medium { next_origin: 1, ..Medium::default() };
        Self { medium: Rc::new(RefCell::new(medium)), origin: 0 }
    }

    /// Another tab sharing this medium.
    #[must_use]
    pub fn sibling(&self) -> Self {
        let mut medium = self.medium.borrow_mut();
        let origin = medium.next_origin;
        medium.next_origin += 1;
        Self { medium: Rc::clone(&self.medium), origin }
    }

    /// Make every subsequent read fail, for every tab.
    pub fn set_fail_reads(&self, fail: bool) {
        self.medium.borrow_mut().fail_reads = fail;
    }

    /// Make every subsequent write or removal fail, for every tab.
    pub fn set_fail_writes(&self, fail: bool) {
        self.medium.borrow_mut().fail_writes = fail;
    }

    /// Read `key` bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.medium.borrow().entries.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.medium.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry, as another tab calling `localStorage.clear()`.
    pub fn clear(&self) -> Result<(), StorageError> {
        {
            let mut medium = self.medium.borrow_mut();
            if medium.fail_writes {
                return Err(StorageError::Write { key: "*".to_owned(), reason: "quota exceeded".to_owned() });
            }
            if medium.entries.is_empty() {
                return Ok(());
            }
            medium.entries.clear();
        }
        self.notify_others(None);
        Ok(())
    }

    fn notify_others(&self, key: Option<&str>) {
        {
            let mut medium = self.medium.borrow_mut();
            if medium.batch_depth > 0 {
                medium.pending.push((self.origin, key.map(str::to_owned)));
                return;
            }
        }
        self.deliver(self.origin, key);
    }

    fn deliver(&self, writer: u64, key: Option<&str>) {
        let handlers: Vec<Rc<dyn Fn(&StorageChange)>> = self
            .medium
            .borrow()
            .watchers
            .iter()
            .filter(|w| w.origin != writer)
            .map(|w| Rc::clone(&w.handler))
            .collect();
        let change = StorageChange { key: key.map(str::to_owned) };
        for handler in handlers {
            handler(&change);
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let medium = self.medium.borrow();
        if medium.fail_reads {
            return Err(StorageError::Read { key: key.to_owned(), reason: "storage disabled".to_owned() });
        }
        Ok(medium.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        {
            let mut medium = self.medium.borrow_mut();
            if medium.fail_writes {
                return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
            }
            if medium.entries.get(key).is_some_and(|existing| existing == value) {
                return Ok(());
            }
            medium.entries.insert(key.to_owned(), value.to_owned());
        }
        self.notify_others(Some(key));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        {
            let mut medium = self.medium.borrow_mut();
            if medium.fail_writes {
                return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
            }
            if medium.entries.remove(key).is_none() {
                return Ok(());
            }
        }
        self.notify_others(Some(key));
        Ok(())
    }

    fn watch(&self, on_change: ChangeHandler) -> Result<(), StorageError> {
        self.medium.borrow_mut().watchers.push(Watcher { origin: self.origin, handler: Rc::from(on_change) });
        Ok(())
    }

    fn batch(&self, writes: &mut dyn FnMut() -> Result<(), StorageError>) -> Result<(), StorageError> {
        self.medium.borrow_mut().batch_depth += 1;
        let result = writes();
        let pending = {
            let mut medium = self.medium.borrow_mut();
            medium.batch_depth -= 1;
            if medium.batch_depth > 0 {
                return result;
            }
            std::mem::take(&mut medium.pending)
        };
        for (writer, key) in pending {
            self.deliver(writer, key.as_deref());
        }
        result
    }
}

// =============================================================================
// BROWSER MEDIUM
// =============================================================================

/// `window.localStorage`. When storage is disabled every operation fails with
/// [`StorageError::Unavailable`] and callers fall back to memory.
#[cfg(feature = "csr")]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; session will not survive reloads");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "csr")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn watch(&self, on_change: ChangeHandler) -> Result<(), StorageError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let area = self.storage()?.clone();
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // sessionStorage changes fire the same event; only react to our area.
        let listener = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
            if event.storage_area().is_some_and(|a| a == area) {
                on_change(&StorageChange { key: event.key() });
            }
        });
        window
            .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
            .map_err(|e| StorageError::Watch(js_reason(&e)))?;
        // Lives as long as the page.
        listener.forget();
        Ok(())
    }
}
