//! # Storage Layer
//!
//! Two seams, mirroring how the data is physically kept:
//!
//! 1. [`backend::StorageBackend`]: a flat key-value medium. Keys are strings,
//!    values are text. This is where the Store blob lives, and where loose legacy
//!    entries from before folders existed may still be lying around.
//! 2. [`DataStore`]: the Store as a whole. One reserved key holds the entire
//!    folder tree as JSON. There is no partial update: callers load the full
//!    [`Store`], change it and save it back.
//!
//! ## Load Semantics
//!
//! - Key absent or blank → empty `Store`.
//! - Anything that does not parse as the folder tree → [`SnipzError::CorruptStore`].
//!   The stored data is trusted; a corrupt blob is an input error for the caller,
//!   never silently replaced by an empty store.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key inside a directory, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── session.json        # Client selection (outside the medium)
//! └── storage/
//!     ├── snippetsData    # The Store blob
//!     └── foo.lua         # Legacy flat entry, folded in by migration
//! ```

use crate::error::{Result, SnipzError};
use crate::model::Store;
use backend::StorageBackend;
use log::debug;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

/// Key holding the serialized Store unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "snippetsData";

/// Whole-store persistence.
pub trait DataStore {
    /// Read the full Store.
    fn load(&self) -> Result<Store>;

    /// Replace the persisted Store with `store`.
    fn save(&mut self, store: &Store) -> Result<()>;
}

/// [`DataStore`] that keeps the Store as JSON under a single backend key.
pub struct SnippetStore<B: StorageBackend> {
    /// Exposed as pub(crate) for migration and tests.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> SnippetStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_backend(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    /// The reserved key the Store lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for SnippetStore<B> {
    fn load(&self) -> Result<Store> {
        let raw = match self.backend.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("no stored data under {:?}, starting empty", self.key);
                return Ok(Store::new());
            }
        };
        serde_json::from_str(&raw).map_err(SnipzError::CorruptStore)
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        let json = serde_json::to_string(store)?;
        self.backend.set_item(&self.key, &json)?;
        debug!(
            "saved {} folders / {} snippets under {:?}",
            store.len(),
            store.snippet_count(),
            self.key
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn load_missing_key_is_empty() {
        let store = SnippetStore::with_backend(MemBackend::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_blank_value_is_empty() {
        let backend = MemBackend::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "  ").unwrap();
        let store = SnippetStore::with_backend(backend);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_malformed_json_is_corrupt() {
        let backend = MemBackend::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = SnippetStore::with_backend(backend);

        let err = store.load().unwrap_err();
        assert!(matches!(err, SnipzError::CorruptStore(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn load_wrong_shape_is_corrupt() {
        let backend = MemBackend::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "[1, 2]").unwrap();
        let store = SnippetStore::with_backend(backend);
        assert!(matches!(
            store.load().unwrap_err(),
            SnipzError::CorruptStore(_)
        ));
    }

    #[test]
    fn save_then_load_returns_same_content() {
        let mut store = SnippetStore::with_backend(MemBackend::new());
        let mut data = Store::new();
        data.ensure_folder("Utils")
            .insert("a.lua".into(), "local x = 1\n\treturn x".into());
        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.snippet("Utils", "a.lua"), Some("local x = 1\n\treturn x"));
    }

    #[test]
    fn save_writes_single_key() {
        let mut store = SnippetStore::new(MemBackend::new(), "custom");
        store.save(&Store::new()).unwrap();

        assert_eq!(store.backend().keys().unwrap(), vec!["custom".to_string()]);
        assert_eq!(
            store.backend().get_item("custom").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn save_surfaces_write_errors() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store = SnippetStore::with_backend(backend);

        assert!(matches!(
            store.save(&Store::new()),
            Err(SnipzError::Store(_))
        ));
    }
}
