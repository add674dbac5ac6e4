/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! `window.localStorage` behind the `KeyValueStore` seam.

use convee_core::{KeyValueStore, MemoryStore, StorageError};

/// Where the cooldown timestamp lives.
///
/// Falls back to memory when the browser refuses local storage (blocked
/// cookies, some private modes); the cooldown then only lasts for the tab.
#[derive(Clone)]
pub enum SiteStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl SiteStore {
    pub fn detect() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => SiteStore::Local(storage),
            _ => {
                log::warn!("localStorage unavailable, keeping the submission cooldown in memory");
                SiteStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for SiteStore {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            SiteStore::Local(storage) => storage.get_item(key).ok().flatten(),
            SiteStore::Memory(memory) => memory.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SiteStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}"))),
            SiteStore::Memory(memory) => memory.write(key, value),
        }
    }
}
