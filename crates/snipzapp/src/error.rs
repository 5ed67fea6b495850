use std::fmt;
use thiserror::Error;

/// What kind of name an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Folder,
    Snippet,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Folder => write!(f, "folder"),
            NameKind::Snippet => write!(f, "snippet"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("A {kind} named \"{name}\" already exists")]
    DuplicateName { kind: NameKind, name: String },

    #[error("The {0} name cannot be empty")]
    EmptyName(NameKind),

    #[error("Import error: {0}")]
    ImportFormat(String),

    #[error("{0} no longer exists")]
    StaleReference(String),

    /// The persisted blob could not be parsed. Not recoverable by retrying.
    #[error("Stored data is corrupt: {0}")]
    CorruptStore(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl SnipzError {
    /// Whether the caller can report this and carry on with the same store.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SnipzError::CorruptStore(_))
    }
}

pub type Result<T> = std::result::Result<T, SnipzError>;
