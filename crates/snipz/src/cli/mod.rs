//! # CLI Behavior
//!
//! This is **one possible UI client** for snipz, not the application itself.
//!
//! ## Naked Execution (`snipz`)
//!
//! Running `snipz` with no arguments defaults to `snipz list`.
//!
//! ## The Selection
//!
//! A browser page keeps the current folder and snippet in memory. A CLI exits
//! after every command, so the selection is written to `session.json` in the data
//! directory and read back on the next run. Commands that take an optional
//! `--folder` fall back to the selected folder.
//!
//! ## Questions
//!
//! Import conflicts and missing rename targets are asked on the terminal.
//! `--yes` / `--no` answer every confirmation up front; without a terminal the
//! answer is "no", so existing snippets are kept.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (colors, folder tree, JSON)
//! - `prompt`: Terminal implementation of the interaction capability

mod commands;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
