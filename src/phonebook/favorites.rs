use std::collections::HashSet;
use log::warn;

use crate::error::Result;
use super::contact::ContactId;

pub(crate) const FAVORITES_KEY: &str = "favoriteContacts";

/// Key-value persistence capability, scoped to the local device. Writes are
/// fire-and-forget; a failed write is logged and never surfaced.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// The persisted set of pinned contact identifiers. Loaded once at
/// construction, flushed after every toggle. The external data store has no
/// notion of favorites; this set is the sole source of truth and may
/// reference identifiers not currently loaded into memory.
pub struct FavoriteSet {
    ids:    HashSet<ContactId>,
    store:  Box<dyn KvStore>,
}

impl FavoriteSet {
    /// A missing or corrupt record yields an empty set, never an error.
    pub fn load(store: Box<dyn KvStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(record)) => match serde_json::from_str::<Vec<i64>>(&record) {
                Ok(ids) => ids.into_iter().map(ContactId::new).collect(),
                Err(e) => {
                    warn!("Discarding corrupt favorites record: {}", e);
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                warn!("Failed to read favorites record: {}", e);
                HashSet::new()
            }
        };

        Self { ids, store }
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.ids.contains(&id)
    }

    /// Adds the id when absent, removes it when present, and flushes the
    /// updated set immediately. Returns whether the contact is a favorite
    /// after the toggle.
    pub fn toggle(&mut self, id: ContactId) -> bool {
        let now_favorite = match self.ids.contains(&id) {
            true => {
                self.ids.remove(&id);
                false
            }
            false => {
                self.ids.insert(id);
                true
            }
        };

        self.flush();
        now_favorite
    }

    /// Membership in ascending id order. The order carries no meaning; it
    /// only keeps the persisted record and derived queries deterministic.
    pub fn ids(&self) -> Vec<ContactId> {
        let mut ids = self.ids.iter().copied().collect::<Vec<_>>();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn flush(&self) {
        let record = self.ids().iter()
            .map(|v| v.value())
            .collect::<Vec<_>>();

        let Ok(record) = serde_json::to_string(&record) else {
            return;
        };

        if let Err(e) = self.store.set(FAVORITES_KEY, &record) {
            warn!("Failed to persist favorites record: {}", e);
        }
    }
}
