use crate::commands::helpers::{folder_gone, normalize_name};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NameKind, Result, SnipzError};
use crate::model::Selection;
use crate::store::DataStore;
use log::info;

pub fn create<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Folder, name)?;
    let mut data = store.load()?;
    if data.contains_folder(&name) {
        return Err(SnipzError::DuplicateName {
            kind: NameKind::Folder,
            name,
        });
    }

    data.ensure_folder(&name);
    store.save(&data)?;
    info!("created folder {:?}", name);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Folder created: {}",
        name
    ))))
}

/// Renames `old` to `new`, carrying its snippets over.
///
/// Renaming to the same name succeeds without touching storage.
pub fn rename<S: DataStore>(
    store: &mut S,
    old: &str,
    new: &str,
    selection: &Selection,
) -> Result<CmdResult> {
    let new = normalize_name(NameKind::Folder, new)?;
    let old = normalize_name(NameKind::Folder, old)?;

    if new == old {
        return Ok(CmdResult::default()
            .with_selection(selection.clone())
            .with_message(CmdMessage::info(format!(
                "Folder name unchanged: {}",
                old
            ))));
    }

    let mut data = store.load()?;
    if data.contains_folder(&new) {
        return Err(SnipzError::DuplicateName {
            kind: NameKind::Folder,
            name: new,
        });
    }
    let Some(snippets) = data.remove_folder(&old) else {
        return Err(folder_gone(&old));
    };

    data.insert_folder(new.clone(), snippets);
    store.save(&data)?;
    info!("renamed folder {:?} to {:?}", old, new);

    Ok(CmdResult::default()
        .with_selection(selection.after_folder_renamed(&old, &new))
        .with_message(CmdMessage::success(format!(
            "Folder renamed: {} -> {}",
            old, new
        ))))
}

/// Deletes a folder and all of its snippets.
///
/// The default folder exists afterwards no matter what was deleted, and a
/// selection pointing at the deleted folder falls back to it.
pub fn delete<S: DataStore>(
    store: &mut S,
    name: &str,
    selection: &Selection,
    default_folder: &str,
) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Folder, name)?;
    let mut data = store.load()?;

    let removed = data.remove_folder(&name);
    let had_default = data.contains_folder(default_folder);
    data.ensure_folder(default_folder);

    let mut result =
        CmdResult::default().with_selection(selection.after_folder_deleted(&name, default_folder));

    if removed.is_some() || !had_default {
        store.save(&data)?;
    }

    match removed {
        Some(snippets) => {
            info!("deleted folder {:?} ({} snippets)", name, snippets.len());
            result.add_message(CmdMessage::success(format!(
                "Folder deleted: {} ({} snippets)",
                name,
                snippets.len()
            )));
        }
        None => result.add_message(CmdMessage::info(format!(
            "No folder named {}, nothing deleted",
            name
        ))),
    }
    Ok(result)
}

/// Makes `name` the selected folder.
pub fn select<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Folder, name)?;
    let data = store.load()?;
    if !data.contains_folder(&name) {
        return Err(folder_gone(&name));
    }
    Ok(CmdResult::default()
        .with_selection(Selection::in_folder(&name))
        .with_message(CmdMessage::info(format!("Using folder {}", name))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mem_store, raw_blob, seeded_store, DEFAULT_FOLDER};

    #[test]
    fn create_two_distinct_folders() {
        let mut store = mem_store();
        create(&mut store, "Utils").unwrap();
        create(&mut store, "Lua").unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.folder("Utils").unwrap().is_empty());
        assert!(data.folder("Lua").unwrap().is_empty());
    }

    #[test]
    fn create_duplicate_fails_and_keeps_one() {
        let mut store = mem_store();
        create(&mut store, "Utils").unwrap();
        let before = raw_blob(&store);

        let err = create(&mut store, "Utils").unwrap_err();
        assert!(matches!(
            err,
            SnipzError::DuplicateName {
                kind: NameKind::Folder,
                ..
            }
        ));
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn create_is_case_sensitive() {
        let mut store = mem_store();
        create(&mut store, "utils").unwrap();
        create(&mut store, "Utils").unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn create_trims_and_rejects_blank() {
        let mut store = mem_store();
        create(&mut store, "  Utils  ").unwrap();
        assert!(store.load().unwrap().contains_folder("Utils"));

        assert!(matches!(
            create(&mut store, "   "),
            Err(SnipzError::EmptyName(NameKind::Folder))
        ));
    }

    #[test]
    fn rename_moves_snippets() {
        let mut store = seeded_store(r#"{"Old":{"a.lua":"x=1"},"Other":{}}"#);
        let sel = Selection::with_snippet("Old", "a.lua");

        let res = rename(&mut store, "Old", "New", &sel).unwrap();

        let data = store.load().unwrap();
        assert!(!data.contains_folder("Old"));
        assert_eq!(data.snippet("New", "a.lua"), Some("x=1"));
        assert_eq!(res.selection, Some(Selection::with_snippet("New", "a.lua")));
    }

    #[test]
    fn rename_round_trip_restores_store() {
        let mut store = seeded_store(r#"{"A":{"s":"1"},"B":{"t":"2"}}"#);
        let original = store.load().unwrap();
        let sel = Selection::in_folder(DEFAULT_FOLDER);

        rename(&mut store, "A", "C", &sel).unwrap();
        rename(&mut store, "C", "A", &sel).unwrap();

        assert_eq!(store.load().unwrap(), original);
    }

    #[test]
    fn rename_to_same_name_is_noop() {
        let mut store = seeded_store(r#"{"A":{}}"#);
        let before = raw_blob(&store);
        let sel = Selection::in_folder("A");

        let res = rename(&mut store, "A", " A ", &sel).unwrap();
        assert_eq!(res.selection, Some(sel));
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn rename_to_taken_name_fails_unchanged() {
        let mut store = seeded_store(r#"{"A":{"s":"1"},"B":{}}"#);
        let before = raw_blob(&store);

        let err = rename(&mut store, "A", "B", &Selection::in_folder("A")).unwrap_err();
        assert!(matches!(err, SnipzError::DuplicateName { .. }));
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn rename_to_blank_fails() {
        let mut store = seeded_store(r#"{"A":{}}"#);
        assert!(matches!(
            rename(&mut store, "A", "  ", &Selection::in_folder("A")),
            Err(SnipzError::EmptyName(NameKind::Folder))
        ));
    }

    #[test]
    fn rename_missing_folder_is_stale() {
        let mut store = seeded_store(r#"{"A":{}}"#);
        assert!(matches!(
            rename(&mut store, "Gone", "B", &Selection::in_folder("A")),
            Err(SnipzError::StaleReference(_))
        ));
    }

    #[test]
    fn delete_selected_folder_resets_to_default_and_creates_it() {
        let mut store = seeded_store(r#"{"Utils":{"a.lua":"x"}}"#);
        let sel = Selection::with_snippet("Utils", "a.lua");

        let res = delete(&mut store, "Utils", &sel, DEFAULT_FOLDER).unwrap();

        let data = store.load().unwrap();
        assert!(!data.contains_folder("Utils"));
        assert!(data.contains_folder(DEFAULT_FOLDER));
        assert_eq!(res.selection, Some(Selection::in_folder(DEFAULT_FOLDER)));
    }

    #[test]
    fn delete_other_folder_keeps_selection() {
        let mut store = seeded_store(r#"{"Sin categoría":{},"A":{},"B":{}}"#);
        let sel = Selection::in_folder("A");

        let res = delete(&mut store, "B", &sel, DEFAULT_FOLDER).unwrap();
        assert_eq!(res.selection, Some(sel));
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn delete_default_folder_leaves_it_empty() {
        let mut store = seeded_store(r#"{"Sin categoría":{"a":"1"}}"#);
        delete(
            &mut store,
            DEFAULT_FOLDER,
            &Selection::in_folder(DEFAULT_FOLDER),
            DEFAULT_FOLDER,
        )
        .unwrap();

        let data = store.load().unwrap();
        assert!(data.folder(DEFAULT_FOLDER).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_folder_writes_nothing_when_default_exists() {
        let mut store = seeded_store(r#"{"Sin categoría":{}}"#);
        let before = raw_blob(&store);

        let res = delete(
            &mut store,
            "Nope",
            &Selection::in_folder(DEFAULT_FOLDER),
            DEFAULT_FOLDER,
        )
        .unwrap();
        assert_eq!(raw_blob(&store), before);
        assert!(res.messages[0].content.contains("nothing deleted"));
    }

    #[test]
    fn select_requires_existing_folder() {
        let store = seeded_store(r#"{"A":{}}"#);
        assert_eq!(
            select(&store, "A").unwrap().selection,
            Some(Selection::in_folder("A"))
        );
        assert!(matches!(
            select(&store, "B"),
            Err(SnipzError::StaleReference(_))
        ));
    }
}
