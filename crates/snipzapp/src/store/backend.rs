use crate::error::Result;

/// Abstract interface for the flat key-value medium.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::SnippetStore`] handles the "what" (the Store blob and its format).
/// Methods take `&self`; implementations handle their own interior mutability.
pub trait StorageBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if the key does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    /// MUST be atomic from the caller's point of view.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Every key currently present.
    fn keys(&self) -> Result<Vec<String>>;
}
