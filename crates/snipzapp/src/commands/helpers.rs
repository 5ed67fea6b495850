use crate::error::{NameKind, Result, SnipzError};

/// Trims a user-supplied name, rejecting blanks.
pub fn normalize_name(kind: NameKind, raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SnipzError::EmptyName(kind));
    }
    Ok(name.to_string())
}

pub(crate) fn folder_gone(name: &str) -> SnipzError {
    SnipzError::StaleReference(format!("Folder \"{}\"", name))
}

pub(crate) fn snippet_gone(folder: &str, name: &str) -> SnipzError {
    SnipzError::StaleReference(format!("Snippet \"{}\" in folder \"{}\"", name, folder))
}
