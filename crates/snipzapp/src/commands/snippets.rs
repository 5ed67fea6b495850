use crate::commands::helpers::{folder_gone, normalize_name, snippet_gone};
use crate::commands::{CmdMessage, CmdResult, SnippetView};
use crate::error::{NameKind, Result};
use crate::model::Selection;
use crate::store::DataStore;
use log::{info, warn};

/// Saves `content` as `name` in `folder`, creating the folder if needed.
/// An existing snippet with that name is overwritten.
pub fn save<S: DataStore>(
    store: &mut S,
    folder: &str,
    name: &str,
    content: &str,
) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Snippet, name)?;
    let folder = normalize_name(NameKind::Folder, folder)?;

    let mut data = store.load()?;
    let existed = data
        .ensure_folder(&folder)
        .insert(name.clone(), content.to_string())
        .is_some();
    store.save(&data)?;
    info!("saved snippet {:?} in {:?}", name, folder);

    let verb = if existed { "updated" } else { "saved" };
    Ok(CmdResult::default()
        .with_selection(Selection::with_snippet(&folder, &name))
        .with_message(CmdMessage::success(format!(
            "Snippet {}: {}/{}",
            verb, folder, name
        ))))
}

pub fn show<S: DataStore>(store: &S, folder: &str, name: &str) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Snippet, name)?;
    let folder = normalize_name(NameKind::Folder, folder)?;

    let data = store.load()?;
    let content = data
        .snippet(&folder, &name)
        .ok_or_else(|| snippet_gone(&folder, &name))?
        .to_string();

    Ok(CmdResult::default()
        .with_selection(Selection::with_snippet(&folder, &name))
        .with_snippet(SnippetView {
            folder,
            name,
            content,
        }))
}

/// Renames a snippet within its folder.
///
/// A snippet already called `new` is replaced without asking.
pub fn rename<S: DataStore>(
    store: &mut S,
    folder: &str,
    old: &str,
    new: &str,
    selection: &Selection,
) -> Result<CmdResult> {
    let new = normalize_name(NameKind::Snippet, new)?;
    let old = normalize_name(NameKind::Snippet, old)?;
    let folder = normalize_name(NameKind::Folder, folder)?;

    if new == old {
        return Ok(CmdResult::default()
            .with_selection(selection.clone())
            .with_message(CmdMessage::info(format!(
                "Snippet name unchanged: {}",
                old
            ))));
    }

    let mut data = store.load()?;
    let Some(snippets) = data.folder_mut(&folder) else {
        return Err(folder_gone(&folder));
    };
    let Some(content) = snippets.shift_remove(&old) else {
        return Err(snippet_gone(&folder, &old));
    };
    let overwritten = snippets.insert(new.clone(), content).is_some();
    store.save(&data)?;
    info!("renamed snippet {:?} to {:?} in {:?}", old, new, folder);

    let mut result = CmdResult::default()
        .with_selection(selection.after_snippet_renamed(&folder, &old, &new))
        .with_message(CmdMessage::success(format!(
            "Snippet renamed: {} -> {}",
            old, new
        )));
    if overwritten {
        result.add_message(CmdMessage::warning(format!(
            "Replaced the previous {} in {}",
            new, folder
        )));
    }
    Ok(result)
}

/// Deletes a snippet. Deleting one that is not there is a no-op.
pub fn delete<S: DataStore>(
    store: &mut S,
    folder: &str,
    name: &str,
    selection: &Selection,
) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Snippet, name)?;
    let folder = normalize_name(NameKind::Folder, folder)?;

    let mut data = store.load()?;
    let removed = data
        .folder_mut(&folder)
        .and_then(|snippets| snippets.shift_remove(&name));

    let mut result =
        CmdResult::default().with_selection(selection.after_snippet_deleted(&folder, &name));
    if removed.is_some() {
        store.save(&data)?;
        info!("deleted snippet {:?} from {:?}", name, folder);
        result.add_message(CmdMessage::success(format!(
            "Snippet deleted: {}/{}",
            folder, name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No snippet {}/{}, nothing deleted",
            folder, name
        )));
    }
    Ok(result)
}

/// Moves a snippet to another folder, creating the target if needed.
///
/// A source entry that is gone by the time the move runs is a no-op: nothing is
/// written and the result carries a warning.
pub fn move_to<S: DataStore>(
    store: &mut S,
    from: &str,
    to: &str,
    name: &str,
    selection: &Selection,
) -> Result<CmdResult> {
    let name = normalize_name(NameKind::Snippet, name)?;
    let from = normalize_name(NameKind::Folder, from)?;
    let to = normalize_name(NameKind::Folder, to)?;

    if from == to {
        return Ok(CmdResult::default()
            .with_selection(selection.clone())
            .with_message(CmdMessage::info(format!("{} is already in {}", name, to))));
    }

    let mut data = store.load()?;
    let Some(content) = data
        .folder_mut(&from)
        .and_then(|snippets| snippets.shift_remove(&name))
    else {
        warn!("move skipped, {:?} is no longer in {:?}", name, from);
        return Ok(CmdResult::default()
            .with_selection(selection.clone())
            .with_message(CmdMessage::warning(format!(
                "{} is no longer in {}, nothing moved",
                name, from
            ))));
    };
    let overwritten = data
        .ensure_folder(&to)
        .insert(name.clone(), content)
        .is_some();
    store.save(&data)?;
    info!("moved snippet {:?} from {:?} to {:?}", name, from, to);

    let mut result = CmdResult::default()
        .with_selection(selection.after_snippet_moved(&from, &to, &name))
        .with_message(CmdMessage::success(format!(
            "Snippet moved: {} -> {}/{}",
            from, to, name
        )));
    if overwritten {
        result.add_message(CmdMessage::warning(format!(
            "Replaced the previous {} in {}",
            name, to
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{folders, MessageLevel};
    use crate::error::SnipzError;
    use crate::test_utils::{mem_store, raw_blob, seeded_store};

    #[test]
    fn save_then_load_returns_exact_content() {
        let mut store = mem_store();
        let content = "local t = {}\n  for i = 1, 3 do t[i] = i end\nreturn t\n";
        save(&mut store, "Utils", "t.lua", content).unwrap();

        assert_eq!(store.load().unwrap().snippet("Utils", "t.lua"), Some(content));
    }

    #[test]
    fn save_creates_missing_folder_and_selects_snippet() {
        let mut store = mem_store();
        let res = save(&mut store, "New", "a.lua", "x").unwrap();

        assert!(store.load().unwrap().contains_folder("New"));
        assert_eq!(res.selection, Some(Selection::with_snippet("New", "a.lua")));
    }

    #[test]
    fn save_overwrites_last_write_wins() {
        let mut store = mem_store();
        save(&mut store, "F", "a", "one").unwrap();
        let res = save(&mut store, "F", "a", "two").unwrap();

        assert_eq!(store.load().unwrap().snippet("F", "a"), Some("two"));
        assert!(res.messages[0].content.contains("updated"));
    }

    #[test]
    fn save_blank_name_fails_without_writing() {
        let mut store = seeded_store(r#"{"F":{}}"#);
        let before = raw_blob(&store);

        assert!(matches!(
            save(&mut store, "F", "  ", "x"),
            Err(SnipzError::EmptyName(NameKind::Snippet))
        ));
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn end_to_end_create_save_rename() {
        let mut store = mem_store();
        let sel = Selection::in_folder("Utils");
        folders::create(&mut store, "Utils").unwrap();
        save(&mut store, "Utils", "a.lua", "x=1").unwrap();
        rename(&mut store, "Utils", "a.lua", "b.lua", &sel).unwrap();

        let data = store.load().unwrap();
        let utils = data.folder("Utils").unwrap();
        assert_eq!(utils.len(), 1);
        assert_eq!(utils.get("b.lua").map(String::as_str), Some("x=1"));
    }

    #[test]
    fn rename_silently_overwrites_existing_target() {
        let mut store = seeded_store(r#"{"F":{"a":"A","b":"B"}}"#);
        let res = rename(&mut store, "F", "a", "b", &Selection::in_folder("F")).unwrap();

        let data = store.load().unwrap();
        let f = data.folder("F").unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f.get("b").map(String::as_str), Some("A"));
        assert_eq!(res.messages.len(), 2);
    }

    #[test]
    fn rename_follows_selection() {
        let mut store = seeded_store(r#"{"F":{"a":"A"}}"#);
        let res = rename(&mut store, "F", "a", "c", &Selection::with_snippet("F", "a")).unwrap();
        assert_eq!(res.selection, Some(Selection::with_snippet("F", "c")));
    }

    #[test]
    fn rename_to_same_name_keeps_snippet() {
        let mut store = seeded_store(r#"{"F":{"a":"A"}}"#);
        rename(&mut store, "F", "a", "a", &Selection::in_folder("F")).unwrap();
        assert_eq!(store.load().unwrap().snippet("F", "a"), Some("A"));
    }

    #[test]
    fn rename_blank_or_missing_fails() {
        let mut store = seeded_store(r#"{"F":{"a":"A"}}"#);
        let sel = Selection::in_folder("F");
        assert!(matches!(
            rename(&mut store, "F", "a", "", &sel),
            Err(SnipzError::EmptyName(_))
        ));
        assert!(matches!(
            rename(&mut store, "F", "zzz", "b", &sel),
            Err(SnipzError::StaleReference(_))
        ));
        assert!(matches!(
            rename(&mut store, "G", "a", "b", &sel),
            Err(SnipzError::StaleReference(_))
        ));
    }

    #[test]
    fn delete_removes_entry_and_clears_selection() {
        let mut store = seeded_store(r#"{"F":{"a":"A","b":"B"}}"#);
        let res = delete(&mut store, "F", "a", &Selection::with_snippet("F", "a")).unwrap();

        assert_eq!(store.load().unwrap().snippet("F", "a"), None);
        assert_eq!(res.selection, Some(Selection::in_folder("F")));
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut store = seeded_store(r#"{"F":{"a":"A"}}"#);
        let before = raw_blob(&store);
        delete(&mut store, "F", "zzz", &Selection::in_folder("F")).unwrap();
        delete(&mut store, "G", "a", &Selection::in_folder("F")).unwrap();
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn move_transfers_ownership() {
        let mut store = seeded_store(r#"{"A":{"s":"content"},"B":{}}"#);
        let sel = Selection::in_folder("A");
        move_to(&mut store, "A", "B", "s", &sel).unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.snippet("A", "s"), None);
        assert_eq!(data.snippet("B", "s"), Some("content"));

        let before = raw_blob(&store);
        move_to(&mut store, "B", "B", "s", &sel).unwrap();
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn move_creates_target_folder() {
        let mut store = seeded_store(r#"{"A":{"s":"1"}}"#);
        move_to(&mut store, "A", "C", "s", &Selection::in_folder("A")).unwrap();
        assert_eq!(store.load().unwrap().snippet("C", "s"), Some("1"));
    }

    #[test]
    fn move_stale_source_writes_nothing() {
        let mut store = seeded_store(r#"{"A":{},"B":{}}"#);
        let before = raw_blob(&store);

        let res = move_to(&mut store, "A", "C", "s", &Selection::in_folder("A")).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(res.selection, Some(Selection::in_folder("A")));
        assert_eq!(raw_blob(&store), before);

        let res = move_to(&mut store, "Gone", "C", "s", &Selection::in_folder("A")).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(raw_blob(&store), before);
    }

    #[test]
    fn move_carries_selection() {
        let mut store = seeded_store(r#"{"A":{"s":"1"}}"#);
        let res = move_to(&mut store, "A", "B", "s", &Selection::with_snippet("A", "s")).unwrap();
        assert_eq!(res.selection, Some(Selection::with_snippet("B", "s")));
    }

    #[test]
    fn show_returns_content_and_selects() {
        let store = seeded_store(r#"{"A":{"s":"print(1)"}}"#);
        let res = show(&store, "A", "s").unwrap();

        assert_eq!(res.snippet.unwrap().content, "print(1)");
        assert_eq!(res.selection, Some(Selection::with_snippet("A", "s")));
        assert!(matches!(
            show(&store, "A", "t"),
            Err(SnipzError::StaleReference(_))
        ));
    }

    #[test]
    fn failed_save_surfaces_error() {
        let mut store = mem_store();
        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            save(&mut store, "F", "a", "x"),
            Err(SnipzError::Store(_))
        ));
    }
}
