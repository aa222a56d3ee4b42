use super::store::{PrefResult, PreferenceStore};
use crate::model::notification::{Notification, NotificationId};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key of the notification list.
pub const NOTIFICATIONS_KEY: &str = "notifications";
/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Typed JSON preferences over a raw key/value store.
pub struct Preferences<S: PreferenceStore> {
    store: S,
    seed_notifications: Vec<Notification>,
}

impl<S: PreferenceStore> Preferences<S> {
    /// `seed_notifications` is written the first time the list is read.
    pub fn new(store: S, seed_notifications: Vec<Notification>) -> Self {
        Self {
            store,
            seed_notifications,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Reads `key`, seeding it with `default` when absent.
    ///
    /// Storage failures and undecodable values yield `default`.
    pub fn get_or_seed<T>(&mut self, key: &str, default: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        "event=pref_read module=prefs status=error error_code=decode_failed key={} error={}",
                        key, err
                    );
                    default
                }
            },
            Ok(None) => {
                if let Err(err) = self.write(key, &default) {
                    warn!(
                        "event=pref_seed module=prefs status=error key={} error={}",
                        key, err
                    );
                } else {
                    info!("event=pref_seed module=prefs status=ok key={key}");
                }
                default
            }
            Err(err) => {
                warn!(
                    "event=pref_read module=prefs status=error error_code=read_failed key={} error={}",
                    key, err
                );
                default
            }
        }
    }

    /// Read-modify-write of the whole value at `key`.
    ///
    /// Returns the value written.
    pub fn update<T, F>(&mut self, key: &str, default: T, transform: F) -> PrefResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut value = self.get_or_seed(key, default);
        transform(&mut value);
        self.write(key, &value)?;
        Ok(value)
    }

    pub fn notifications(&mut self) -> Vec<Notification> {
        let seed = self.seed_notifications.clone();
        self.get_or_seed(NOTIFICATIONS_KEY, seed)
    }

    /// Marks one notification read. Returns whether it was found.
    pub fn mark_read(&mut self, id: NotificationId) -> PrefResult<bool> {
        self.update_notification(id, |item| item.read = true)
    }

    /// Flips the read flag of one notification. Returns whether it was found.
    pub fn toggle_read(&mut self, id: NotificationId) -> PrefResult<bool> {
        self.update_notification(id, |item| item.read = !item.read)
    }

    /// Marks every notification read and returns how many changed.
    pub fn mark_all_read(&mut self) -> PrefResult<usize> {
        let mut changed = 0;
        let seed = self.seed_notifications.clone();
        self.update(NOTIFICATIONS_KEY, seed, |items: &mut Vec<Notification>| {
            for item in items.iter_mut().filter(|item| !item.read) {
                item.read = true;
                changed += 1;
            }
        })?;
        Ok(changed)
    }

    pub fn dark_mode(&mut self) -> bool {
        self.get_or_seed(DARK_MODE_KEY, false)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> PrefResult<()> {
        self.update(DARK_MODE_KEY, false, |value| *value = enabled)?;
        Ok(())
    }

    /// Flips dark mode and returns the new flag.
    pub fn toggle_dark_mode(&mut self) -> PrefResult<bool> {
        self.update(DARK_MODE_KEY, false, |value: &mut bool| *value = !*value)
    }

    fn update_notification(
        &mut self,
        id: NotificationId,
        change: impl FnOnce(&mut Notification),
    ) -> PrefResult<bool> {
        let mut found = false;
        let seed = self.seed_notifications.clone();
        self.update(NOTIFICATIONS_KEY, seed, |items: &mut Vec<Notification>| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                change(item);
                found = true;
            }
        })?;
        Ok(found)
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> PrefResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).map_err(|err| {
            error!(
                "event=pref_write module=prefs status=error key={} error={}",
                key, err
            );
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Preferences, DARK_MODE_KEY};
    use crate::prefs::store::{MemoryStore, PrefError, PrefResult, PreferenceStore};

    /// Backend whose reads and writes always fail.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> PrefResult<Option<String>> {
            Err(PrefError::Unavailable("disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> PrefResult<()> {
            Err(PrefError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn missing_key_is_seeded_with_default() {
        let mut prefs = Preferences::new(MemoryStore::new(), Vec::new());
        assert!(!prefs.dark_mode());
        assert_eq!(
            prefs.store().get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn corrupt_value_reads_as_default() {
        let mut store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "not json").unwrap();
        let mut prefs = Preferences::new(store, Vec::new());
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn broken_backend_reads_default_and_reports_write_error() {
        let mut prefs = Preferences::new(BrokenStore, Vec::new());
        assert!(!prefs.dark_mode());
        assert!(prefs.notifications().is_empty());
        let err = prefs.toggle_dark_mode().unwrap_err();
        assert!(matches!(err, PrefError::Unavailable(_)));
    }
}
