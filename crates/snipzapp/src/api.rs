//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all snipz operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries context** the commands need but callers should not repeat
//!   (the configured default folder)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O. The caller owns the
//! [`Selection`] and passes it in; operations that change it return the new one
//! in [`CmdResult::selection`].
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `SnipzApi<FsBackend>`
//! - Testing: `SnipzApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::model::Selection;
use crate::session;
use crate::store::backend::StorageBackend;
use crate::store::{DataStore, SnippetStore};
use std::path::Path;

pub struct SnipzApi<B: StorageBackend> {
    store: SnippetStore<B>,
    default_folder: String,
}

impl<B: StorageBackend> SnipzApi<B> {
    pub fn new(store: SnippetStore<B>, default_folder: impl Into<String>) -> Self {
        Self {
            store,
            default_folder: default_folder.into(),
        }
    }

    pub fn default_folder(&self) -> &str {
        &self.default_folder
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }

    /// Folds legacy flat entries into the default folder.
    pub fn migrate(&mut self) -> Result<CmdResult> {
        commands::migrate::run(&mut self.store, &self.default_folder)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_folder(&mut self, name: &str) -> Result<CmdResult> {
        commands::folders::create(&mut self.store, name)
    }

    pub fn rename_folder(
        &mut self,
        old: &str,
        new: &str,
        selection: &Selection,
    ) -> Result<CmdResult> {
        commands::folders::rename(&mut self.store, old, new, selection)
    }

    pub fn delete_folder(&mut self, name: &str, selection: &Selection) -> Result<CmdResult> {
        commands::folders::delete(&mut self.store, name, selection, &self.default_folder)
    }

    pub fn select_folder(&self, name: &str) -> Result<CmdResult> {
        commands::folders::select(&self.store, name)
    }

    pub fn save_snippet(&mut self, folder: &str, name: &str, content: &str) -> Result<CmdResult> {
        commands::snippets::save(&mut self.store, folder, name, content)
    }

    pub fn show_snippet(&self, folder: &str, name: &str) -> Result<CmdResult> {
        commands::snippets::show(&self.store, folder, name)
    }

    pub fn rename_snippet(
        &mut self,
        folder: &str,
        old: &str,
        new: &str,
        selection: &Selection,
    ) -> Result<CmdResult> {
        commands::snippets::rename(&mut self.store, folder, old, new, selection)
    }

    pub fn delete_snippet(
        &mut self,
        folder: &str,
        name: &str,
        selection: &Selection,
    ) -> Result<CmdResult> {
        commands::snippets::delete(&mut self.store, folder, name, selection)
    }

    pub fn move_snippet(
        &mut self,
        from: &str,
        to: &str,
        name: &str,
        selection: &Selection,
    ) -> Result<CmdResult> {
        commands::snippets::move_to(&mut self.store, from, to, name, selection)
    }

    /// Pretty-printed JSON of the whole store.
    pub fn export_all(&self) -> Result<Vec<u8>> {
        commands::export::export_all(&self.store)
    }

    pub fn export_to(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn import_merge(
        &mut self,
        bytes: &[u8],
        interaction: &mut dyn Interaction,
    ) -> Result<commands::import::MergeReport> {
        commands::import::import_merge(&mut self.store, bytes, interaction)
    }

    pub fn import_file(
        &mut self,
        path: &Path,
        interaction: &mut dyn Interaction,
    ) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path, interaction)
    }

    /// Drops the parts of a remembered selection that no longer exist.
    pub fn revalidate(&self, selection: Selection) -> Result<Selection> {
        let data = self.store.load()?;
        Ok(session::revalidate(
            selection,
            &data,
            &self.default_folder,
        ))
    }
}
