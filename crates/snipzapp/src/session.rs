//! Selection persistence.
//!
//! The client is short-lived, so the current folder/snippet is written to
//! `session.json` between runs. The file lives next to the storage medium, never
//! inside it, so legacy migration cannot mistake it for a snippet.

use crate::error::Result;
use crate::model::{Selection, Store};
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the saved selection, or the default folder when there is none.
/// An unreadable session file is discarded with a warning.
pub fn load(path: &Path, default_folder: &str) -> Result<Selection> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(Selection::in_folder(default_folder))
        }
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&raw) {
        Ok(selection) => Ok(selection),
        Err(e) => {
            warn!("ignoring unreadable session file {}: {}", path.display(), e);
            Ok(Selection::in_folder(default_folder))
        }
    }
}

pub fn save(path: &Path, selection: &Selection) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(selection)?)?;
    Ok(())
}

/// Drops the parts of a selection that no longer exist in `store`.
pub fn revalidate(selection: Selection, store: &Store, default_folder: &str) -> Selection {
    if !store.contains_folder(&selection.folder) {
        return Selection::in_folder(default_folder);
    }
    let snippet_gone = selection
        .snippet
        .as_deref()
        .is_some_and(|name| store.snippet(&selection.folder, name).is_none());
    if snippet_gone {
        Selection::in_folder(selection.folder)
    } else {
        selection
    }
}
