//! Client-side authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` owns the one session of the running client and mirrors it into a
//! durable medium (`storage`) so it survives reloads and follows logins and
//! logouts made in sibling tabs. `model` and `role` are the plain data the
//! route guard reads.

pub mod model;
pub mod role;
pub mod storage;
pub mod store;

pub use model::{Identity, Session};
pub use role::Role;
pub use storage::{KeyValueStorage, MemoryStorage, PlatformStorage, StorageChange, StorageError, platform_storage};
pub use store::{SessionError, SessionKeys, SessionStore, SubscriptionId};
