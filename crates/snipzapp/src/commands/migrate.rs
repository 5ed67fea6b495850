//! Legacy migration.
//!
//! Before folders existed every snippet was its own key in the storage medium.
//! On start-up those loose entries are folded into the default folder, keyed by
//! their old key, and the loose key is removed. Running it again finds nothing
//! left to move.
//!
//! The Store is saved before any loose key is removed, so a failed save never
//! loses a snippet. A loose key that collides with an existing snippet in the
//! default folder overwrites it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::{DataStore, SnippetStore};
use log::{info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Keys moved into the default folder, in scan order.
    pub migrated: Vec<String>,
    /// Keys that could not be read as text and were left alone.
    pub unreadable: Vec<String>,
}

pub fn migrate_legacy<B: StorageBackend>(
    store: &mut SnippetStore<B>,
    default_folder: &str,
) -> Result<MigrationReport> {
    let reserved = store.key().to_string();
    let mut data = store.load()?;
    data.ensure_folder(default_folder);

    let mut report = MigrationReport::default();
    for key in store.backend.keys()? {
        // Snippet names are trimmed everywhere else, so a padded key becomes its
        // trimmed name. A key that is nothing but whitespace stays in place.
        let name = key.trim().to_string();
        if key == reserved || name.is_empty() {
            continue;
        }
        match store.backend.get_item(&key) {
            Ok(Some(value)) if !value.trim().is_empty() => {
                data.ensure_folder(default_folder).insert(name, value);
                report.migrated.push(key);
            }
            Ok(_) => {}
            Err(e) => {
                warn!("skipping legacy entry {:?}: {}", key, e);
                report.unreadable.push(key);
            }
        }
    }

    store.save(&data)?;

    for key in &report.migrated {
        store.backend.remove_item(key)?;
        info!("migrated legacy snippet: {}", key);
    }
    Ok(report)
}

pub fn run<B: StorageBackend>(
    store: &mut SnippetStore<B>,
    default_folder: &str,
) -> Result<CmdResult> {
    let report = migrate_legacy(store, default_folder)?;
    let mut result = CmdResult::default();

    if report.migrated.is_empty() {
        result.add_message(CmdMessage::info("No legacy snippets to migrate."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Migrated {} legacy snippets into {}",
            report.migrated.len(),
            default_folder
        )));
    }
    for key in &report.unreadable {
        result.add_message(CmdMessage::warning(format!(
            "Could not read legacy entry {}, left in place",
            key
        )));
    }
    Ok(result)
}
