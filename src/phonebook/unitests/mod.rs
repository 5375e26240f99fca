mod test_contact;
mod test_filter;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    Error,
    error::Result,
};

use super::{
    contact::{Contact, ContactBuilder, ContactId},
    favorites::KvStore,
};

// Shared-handle in-memory store so tests can inspect what a FavoriteSet
// persisted after handing it the boxed capability.
#[derive(Clone)]
pub(crate) struct MemStore {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub(crate) fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.records.lock().unwrap().insert(key.to_string(), value.to_string());
        store
    }

    pub(crate) fn record(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.records.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub(crate) struct BrokenStore;

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Store("store is broken".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Store("store is broken".into()))
    }
}

pub(crate) fn contact(id: i64, first_name: &str, last_name: &str, number: &str) -> Contact {
    ContactBuilder::new(ContactId::new(id))
        .with_first_name(first_name)
        .with_last_name(last_name)
        .with_created("2023-11-05T09:01:07.16625+00:00")
        .with_phone(number)
        .build()
        .unwrap()
}
