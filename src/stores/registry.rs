//! Caller-owned registry of transaction stores keyed by backing file path.
//!
//! A store is constructed once per path and reused on later lookups.
//! Ownership stays with whoever holds the registry; there is no
//! module-level static.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::stores::TransactionStore;
use crate::Error;

#[derive(Default)]
pub struct StoreRegistry {
    stores: HashMap<PathBuf, TransactionStore>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            stores: HashMap::new(),
        }
    }

    /// Returns the store backed by `path`, opening it on first use.
    ///
    /// A failed open leaves no entry behind, so a later call retries the
    /// load instead of handing out a dead store.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<&mut TransactionStore, Error> {
        match self.stores.entry(path.as_ref().to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let store = TransactionStore::open(entry.key())?;
                Ok(entry.insert(store))
            }
        }
    }

    /// Looks up an already-open store without constructing one.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&TransactionStore> {
        self.stores.get(path.as_ref())
    }
}
