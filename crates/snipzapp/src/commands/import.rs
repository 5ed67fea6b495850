//! Import merge.
//!
//! An exported tree is merged into the current Store folder by folder, snippet by
//! snippet, in the order the file lists them:
//!
//! - Missing folders are created.
//! - Snippets the target does not have are added.
//! - Snippets with identical content are left as they are.
//! - Snippets whose content differs are a conflict: the [`Interaction`] is asked
//!   whether to replace, and the merge waits for the answer before moving on.
//!   Declining keeps the existing content.
//!
//! The input is validated in full before anything is loaded or written, and the
//! merged Store is saved once at the end.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::interaction::Interaction;
use crate::model::Store;
use crate::store::DataStore;
use log::info;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub folders_created: usize,
    pub added: usize,
    pub replaced: usize,
    pub kept: usize,
    pub unchanged: usize,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        self.folders_created + self.added + self.replaced > 0
    }
}

/// Parses an import payload, rejecting anything but a tree of text snippets.
///
/// Folder and snippet names are trimmed the same way user input is, so every
/// imported entry can be addressed afterwards. Names that only differ in
/// surrounding whitespace collide and are rejected.
pub fn parse_tree(bytes: &[u8]) -> Result<Store> {
    let raw: Store = serde_json::from_slice(bytes).map_err(|e| {
        SnipzError::ImportFormat(format!(
            "expected an object of folders, each mapping snippet names to text ({})",
            e
        ))
    })?;

    let mut tree = Store::new();
    for (folder, snippets) in raw.folders() {
        let folder = folder.trim();
        if folder.is_empty() {
            return Err(SnipzError::ImportFormat("blank folder name".to_string()));
        }
        if tree.contains_folder(folder) {
            return Err(SnipzError::ImportFormat(format!(
                "folder \"{}\" is listed twice",
                folder
            )));
        }

        let target = tree.ensure_folder(folder);
        for (name, content) in snippets {
            let name = name.trim();
            if name.is_empty() {
                return Err(SnipzError::ImportFormat(format!(
                    "blank snippet name in folder \"{}\"",
                    folder
                )));
            }
            if target.insert(name.to_string(), content.clone()).is_some() {
                return Err(SnipzError::ImportFormat(format!(
                    "snippet \"{}\" is listed twice in folder \"{}\"",
                    name, folder
                )));
            }
        }
    }
    Ok(tree)
}

pub fn conflict_question(folder: &str, name: &str) -> String {
    format!("\"{}\" already exists in \"{}\". Replace it?", name, folder)
}

/// Merges `imported` into `target`, asking about each conflict in turn.
pub fn merge_into(
    target: &mut Store,
    imported: &Store,
    interaction: &mut dyn Interaction,
) -> MergeReport {
    let mut report = MergeReport::default();

    for (folder_name, snippets) in imported.folders() {
        if !target.contains_folder(folder_name) {
            report.folders_created += 1;
        }
        let folder = target.ensure_folder(folder_name);

        for (name, content) in snippets {
            match folder.get(name).map(|existing| existing == content) {
                None => {
                    folder.insert(name.clone(), content.clone());
                    report.added += 1;
                }
                Some(true) => report.unchanged += 1,
                Some(false) => {
                    if interaction.confirm(&conflict_question(folder_name, name)) {
                        folder.insert(name.clone(), content.clone());
                        report.replaced += 1;
                        info!("import replaced {:?} in {:?}", name, folder_name);
                    } else {
                        report.kept += 1;
                        info!("import kept existing {:?} in {:?}", name, folder_name);
                    }
                }
            }
        }
    }
    report
}

/// Merges an import payload into the store.
pub fn import_merge<S: DataStore>(
    store: &mut S,
    bytes: &[u8],
    interaction: &mut dyn Interaction,
) -> Result<MergeReport> {
    let imported = parse_tree(bytes)?;
    let mut data = store.load()?;
    let report = merge_into(&mut data, &imported, interaction);
    if report.changed() {
        store.save(&data)?;
    }
    Ok(report)
}

pub fn run<S: DataStore>(
    store: &mut S,
    path: &Path,
    interaction: &mut dyn Interaction,
) -> Result<CmdResult> {
    let bytes = fs::read(path)?;
    let report = import_merge(store, &bytes, interaction)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {}: {} added, {} replaced, {} kept, {} unchanged",
        path.display(),
        report.added,
        report.replaced,
        report.kept,
        report.unchanged
    )));
    if report.folders_created > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} new folders",
            report.folders_created
        )));
    }
    Ok(result)
}
