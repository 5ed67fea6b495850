//! # Domain Model
//!
//! A [`Store`] maps folder names to [`Folder`]s, and a folder maps snippet names to
//! their raw text content. Both levels keep insertion order: listings show folders
//! sorted (see [`crate::collation`]) but snippets in the order they were added.
//!
//! ```json
//! {
//!   "Sin categoría": { "hello.lua": "print('hi')" },
//!   "Utils": { "string-split.lua": "..." }
//! }
//! ```
//!
//! The whole `Store` is the unit of persistence. Its serialized form is exactly the
//! JSON object above, which is also the export/import format.
//!
//! [`Selection`] is the client's current folder/snippet. It is an immutable value:
//! operations that affect it hand back an updated copy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collation;

/// Snippet name → content, in insertion order.
pub type Folder = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    folders: IndexMap<String, Folder>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn contains_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.get(name)
    }

    pub fn folder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.folders.get_mut(name)
    }

    /// Returns the folder, creating it empty if absent.
    pub fn ensure_folder(&mut self, name: &str) -> &mut Folder {
        self.folders.entry(name.to_string()).or_default()
    }

    /// Inserts or replaces a folder wholesale.
    pub fn insert_folder(&mut self, name: impl Into<String>, folder: Folder) {
        self.folders.insert(name.into(), folder);
    }

    pub fn remove_folder(&mut self, name: &str) -> Option<Folder> {
        self.folders.shift_remove(name)
    }

    pub fn snippet(&self, folder: &str, name: &str) -> Option<&str> {
        self.folders
            .get(folder)
            .and_then(|f| f.get(name))
            .map(String::as_str)
    }

    pub fn folders(&self) -> impl Iterator<Item = (&String, &Folder)> {
        self.folders.iter()
    }

    /// Folder names in display order.
    pub fn sorted_folder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.folders.keys().map(String::as_str).collect();
        names.sort_by(|a, b| collation::compare(a, b));
        names
    }

    pub fn snippet_count(&self) -> usize {
        self.folders.values().map(IndexMap::len).sum()
    }
}

/// The folder and snippet the user is currently working with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub folder: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Selection {
    pub fn in_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            snippet: None,
        }
    }

    pub fn with_snippet(folder: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            snippet: Some(snippet.into()),
        }
    }

    pub fn is_snippet(&self, folder: &str, name: &str) -> bool {
        self.folder == folder && self.snippet.as_deref() == Some(name)
    }

    pub fn after_folder_renamed(&self, old: &str, new: &str) -> Self {
        if self.folder == old {
            Self {
                folder: new.to_string(),
                snippet: self.snippet.clone(),
            }
        } else {
            self.clone()
        }
    }

    pub fn after_folder_deleted(&self, name: &str, default_folder: &str) -> Self {
        if self.folder == name {
            Self::in_folder(default_folder)
        } else {
            self.clone()
        }
    }

    pub fn after_snippet_renamed(&self, folder: &str, old: &str, new: &str) -> Self {
        if self.is_snippet(folder, old) {
            Self::with_snippet(folder, new)
        } else {
            self.clone()
        }
    }

    pub fn after_snippet_deleted(&self, folder: &str, name: &str) -> Self {
        if self.is_snippet(folder, name) {
            Self::in_folder(folder)
        } else {
            self.clone()
        }
    }

    pub fn after_snippet_moved(&self, from: &str, to: &str, name: &str) -> Self {
        if self.is_snippet(from, name) {
            Self::with_snippet(to, name)
        } else {
            self.clone()
        }
    }
}
