use crate::store::backend::StorageBackend;
use crate::store::mem_backend::MemBackend;
use crate::store::{SnippetStore, DEFAULT_STORAGE_KEY};

pub const DEFAULT_FOLDER: &str = "Sin categoría";

/// An empty in-memory store.
pub fn mem_store() -> SnippetStore<MemBackend> {
    SnippetStore::with_backend(MemBackend::new())
}

/// An in-memory store whose blob is `json`, exactly as written.
pub fn seeded_store(json: &str) -> SnippetStore<MemBackend> {
    let backend = MemBackend::new();
    backend
        .set_item(DEFAULT_STORAGE_KEY, json)
        .expect("memory backend write");
    SnippetStore::with_backend(backend)
}

/// The persisted blob, for asserting that failed operations wrote nothing.
pub fn raw_blob(store: &SnippetStore<MemBackend>) -> Option<String> {
    store
        .backend()
        .get_item(store.key())
        .expect("memory backend read")
}
