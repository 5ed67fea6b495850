use snipzapp::error::SnipzError;
use snipzapp::model::Store;
use snipzapp::store::backend::StorageBackend;
use snipzapp::store::fs_backend::FsBackend;
use snipzapp::store::{DataStore, SnippetStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("storage"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_item_io() {
    let (_dir, backend) = setup();

    backend.set_item("hello.lua", "print('hi')").unwrap();
    assert_eq!(
        backend.get_item("hello.lua").unwrap(),
        Some("print('hi')".to_string())
    );

    backend.remove_item("hello.lua").unwrap();
    assert_eq!(backend.get_item("hello.lua").unwrap(), None);
}

#[test]
fn test_fs_backend_missing_root_has_no_keys() {
    let (_dir, backend) = setup();
    assert!(backend.keys().unwrap().is_empty());
    assert_eq!(backend.get_item("anything").unwrap(), None);
}

#[test]
fn test_fs_backend_remove_missing_is_ok() {
    let (_dir, backend) = setup();
    backend.remove_item("never-existed").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    backend.set_item("snippetsData", "{}").unwrap();
    backend.set_item("snippetsData", "{\"a\":{}}").unwrap();

    let root = dir.path().join("storage");
    for entry in fs::read_dir(&root).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(
        fs::read_to_string(root.join("snippetsData")).unwrap(),
        "{\"a\":{}}"
    );
}

#[test]
fn test_fs_backend_keys_skip_hidden_files_and_dirs() {
    let (dir, backend) = setup();
    backend.set_item("b.lua", "b").unwrap();
    backend.set_item("a.lua", "a").unwrap();

    let root = dir.path().join("storage");
    fs::write(root.join(".hidden"), "x").unwrap();
    fs::create_dir(root.join("nested")).unwrap();

    assert_eq!(
        backend.keys().unwrap(),
        vec!["a.lua".to_string(), "b.lua".to_string()]
    );
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    for key in ["", "../escape", "a/b", ".hidden"] {
        assert!(
            matches!(backend.set_item(key, "x"), Err(SnipzError::Store(_))),
            "key {:?} should be rejected",
            key
        );
    }
}

#[test]
fn test_snippet_store_over_fs_backend() {
    let (_dir, backend) = setup();
    let mut store = SnippetStore::with_backend(backend);

    let mut data = Store::new();
    data.ensure_folder("Sin categoría")
        .insert("hello.lua".into(), "print('hi')".into());
    store.save(&data).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, data);
    assert_eq!(store.backend().keys().unwrap(), vec!["snippetsData"]);
}
