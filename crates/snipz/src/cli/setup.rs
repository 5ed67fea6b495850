use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "snipz",
    bin_name = "snipz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Folder-organized snippet manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true, conflicts_with = "no", help_heading = "Options")]
    pub yes: bool,

    /// Answer no to every confirmation
    #[arg(long, global = true, help_heading = "Options")]
    pub no: bool,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List folders and their snippets
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Manage folders
    #[command(display_order = 2)]
    Folder {
        #[command(subcommand)]
        action: FolderCommands,
    },

    /// Save a snippet, replacing one with the same name
    #[command(display_order = 3)]
    Save {
        /// Snippet name, e.g. string-split.lua
        name: String,

        /// Snippet content (read from --file or stdin when omitted)
        content: Option<String>,

        /// Read the content from a file
        #[arg(long, conflicts_with = "content")]
        file: Option<PathBuf>,

        /// Target folder (defaults to the selected folder)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Print a snippet
    #[command(display_order = 4)]
    Show {
        /// Snippet name (defaults to the selected snippet)
        name: Option<String>,

        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Rename a snippet within its folder
    #[command(alias = "mv-name", display_order = 5)]
    Rename {
        old: String,

        /// New name (asked for when omitted)
        new: Option<String>,

        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Delete a snippet
    #[command(alias = "rm", display_order = 6)]
    Delete {
        name: String,

        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Move a snippet to another folder
    #[command(display_order = 7)]
    Move {
        name: String,

        /// Destination folder
        to: String,

        /// Source folder (defaults to the selected folder)
        #[arg(long)]
        from: Option<String>,
    },

    /// Export every folder as pretty-printed JSON
    #[command(display_order = 20)]
    Export {
        /// Output file (defaults to the configured backup file name)
        path: Option<PathBuf>,

        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "path")]
        stdout: bool,
    },

    /// Merge a JSON export into the current snippets
    #[command(display_order = 21)]
    Import { path: PathBuf },

    /// Fold legacy flat entries into the default folder
    #[command(display_order = 22)]
    Migrate,

    /// Show the current selection and totals
    #[command(display_order = 30)]
    Status,

    /// Show the resolved configuration
    #[command(display_order = 31)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a folder
    New { name: String },

    /// Rename a folder
    Rename {
        old: String,
        /// New name (asked for when omitted)
        new: Option<String>,
    },

    /// Delete a folder and every snippet in it
    #[command(alias = "rm")]
    Delete { name: String },

    /// Select a folder
    Use { name: String },
}
