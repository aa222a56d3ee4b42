//! Durable key-scoped preferences.
//!
//! # Responsibility
//! - Persist the notification list and the dark-mode flag across sessions.
//! - Seed missing keys with caller-supplied defaults.
//!
//! # Invariants
//! - Every mutation reads the stored value, transforms it and writes the
//!   whole new value back; there are no partial writes.
//! - A failed or corrupt read yields the supplied default, never a panic.
//! - No cross-process synchronization: the last writer wins.

mod preferences;
mod store;

pub use preferences::{Preferences, DARK_MODE_KEY, NOTIFICATIONS_KEY};
pub use store::{MemoryStore, PrefError, PrefResult, PreferenceStore, SqliteStore};
