use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// The whole Store as pretty-printed JSON. Reads only.
pub fn export_all<S: DataStore>(store: &S) -> Result<Vec<u8>> {
    let data = store.load()?;
    Ok(serde_json::to_vec_pretty(&data)?)
}

/// Writes the backup to `path`.
pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    fs::write(path, export_all(store)?)?;
    let data = store.load()?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Exported {} snippets in {} folders to {}",
        data.snippet_count(),
        data.len(),
        path.display()
    ))))
}
