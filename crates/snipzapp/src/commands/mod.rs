//! # Command Layer
//!
//! The **core business logic** of snipz. Each command lives in its own submodule and
//! implements plain functions over a [`DataStore`](crate::store::DataStore).
//!
//! ## Shape of a Command
//!
//! Every mutating command follows the same cycle:
//!
//! 1. Normalize and validate the names it was given.
//! 2. `load()` the whole Store.
//! 3. Check the preconditions against it (duplicates, stale references).
//! 4. Mutate the in-memory copy and `save()` it back.
//!
//! Validation always happens before the save, so a reported failure leaves the
//! persisted Store exactly as it was.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `folders`: folder listings (for `list`)
//! - `snippet`: a snippet's content (for `show`)
//! - `selection`: the updated [`Selection`] when the command affects it
//! - `messages`: leveled notifications for the client to surface
//!
//! ## Command Modules
//!
//! - [`folders`]: create, rename, delete, select folders
//! - [`snippets`]: save, show, rename, delete, move snippets
//! - [`list`]: the folder/snippet tree in display order
//! - [`migrate`]: fold legacy flat entries into the default folder
//! - [`export`]: serialize the Store for backup
//! - [`import`]: merge an exported tree back in
//! - [`helpers`]: name normalization

use crate::model::Selection;
use serde::Serialize;

pub mod export;
pub mod folders;
pub mod helpers;
pub mod import;
pub mod list;
pub mod migrate;
pub mod snippets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A folder and its snippet names, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderListing {
    pub name: String,
    pub snippets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetView {
    pub folder: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub folders: Vec<FolderListing>,
    pub snippet: Option<SnippetView>,
    pub selection: Option<Selection>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_folders(mut self, folders: Vec<FolderListing>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_snippet(mut self, snippet: SnippetView) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
