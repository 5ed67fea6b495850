use crate::commands::{CmdResult, FolderListing};
use crate::error::Result;
use crate::store::DataStore;

/// Folders in collation order, each with its snippets in insertion order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let data = store.load()?;
    let folders = data
        .sorted_folder_names()
        .into_iter()
        .map(|name| FolderListing {
            name: name.to_string(),
            snippets: data
                .folder(name)
                .map(|f| f.keys().cloned().collect())
                .unwrap_or_default(),
        })
        .collect();
    Ok(CmdResult::default().with_folders(folders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mem_store, seeded_store};

    #[test]
    fn empty_store_lists_nothing() {
        let store = mem_store();
        assert!(run(&store).unwrap().folders.is_empty());
    }

    #[test]
    fn folders_sorted_snippets_in_insertion_order() {
        let store = seeded_store(
            r#"{"Oso":{},"ñandú":{},"Beta":{"z.lua":"","a.lua":"","m.lua":""},"nube":{},"árbol":{}}"#,
        );
        let res = run(&store).unwrap();

        let names: Vec<&str> = res.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["árbol", "Beta", "nube", "ñandú", "Oso"]);
        assert_eq!(res.folders[1].snippets, vec!["z.lua", "a.lua", "m.lua"]);
    }
}
