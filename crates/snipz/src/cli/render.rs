//! Terminal output.
//!
//! Every `format_*` function returns a plain `String` so tests can check layout
//! without a terminal; the `print_*` wrappers write to stdout. Colors come from
//! `colored`, which switches itself off when stdout is not a terminal.

use colored::Colorize;
use serde::Serialize;
use snipzapp::commands::{CmdMessage, CmdResult, FolderListing, MessageLevel, SnippetView};
use snipzapp::config::SnipzConfig;
use snipzapp::model::Selection;

pub const SELECTED_MARKER: &str = "▸";

pub fn format_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", format_messages(messages));
}

/// Folders in listing order, each followed by its snippets. The selected folder
/// and snippet carry the selection marker.
pub fn format_folders(folders: &[FolderListing], selection: &Selection) -> String {
    if folders.is_empty() {
        return format!("{}\n", "No folders yet. Save a snippet to get started.".dimmed());
    }

    let mut out = String::new();
    for folder in folders {
        let is_current = folder.name == selection.folder;
        let marker = if is_current { SELECTED_MARKER } else { " " };
        let name = if is_current {
            folder.name.bold()
        } else {
            folder.name.normal()
        };
        let count = format!("({})", folder.snippets.len());
        out.push_str(&format!("{} {} {}\n", marker, name, count.dimmed()));

        for snippet in &folder.snippets {
            if selection.is_snippet(&folder.name, snippet) {
                out.push_str(&format!("  {} {}\n", SELECTED_MARKER, snippet.cyan()));
            } else {
                out.push_str(&format!("    {}\n", snippet));
            }
        }
    }
    out
}

pub fn print_folders(folders: &[FolderListing], selection: &Selection) {
    print!("{}", format_folders(folders, selection));
}

pub fn print_snippet(view: &SnippetView) {
    println!("{}", format!("{}/{}", view.folder, view.name).dimmed());
    println!("{}", view.content);
}

pub fn format_status(selection: &Selection, folders: &[FolderListing]) -> String {
    let snippets: usize = folders.iter().map(|f| f.snippets.len()).sum();
    let current = match &selection.snippet {
        Some(name) => format!("{}/{}", selection.folder, name),
        None => selection.folder.clone(),
    };
    format!(
        "Selected: {}\nFolders:  {}\nSnippets: {}\n",
        current.bold(),
        folders.len(),
        snippets
    )
}

pub fn format_config(config: &SnipzConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{:<18}{}\n", key, value))
        .collect()
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    folders: Option<&'a [FolderListing]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet: Option<&'a SnippetView>,
    selection: &'a Selection,
    messages: &'a [CmdMessage],
}

pub fn format_json(result: &CmdResult, selection: &Selection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        folders: (!result.folders.is_empty()).then_some(result.folders.as_slice()),
        snippet: result.snippet.as_ref(),
        selection,
        messages: &result.messages,
    })
}
