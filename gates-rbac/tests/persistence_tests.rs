//! End-to-end tests for gate state persisted to a file store.

use gates_rbac::store::{PERMISSIONS_KEY, ROLES_KEY};
use gates_rbac::{FileStore, Gates, GatesConfig, KeyValueStore, Query};

fn config() -> GatesConfig {
    GatesConfig::default()
        .with_persistent(true)
        .with_super_role("admin")
}

#[test]
fn test_session_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");

    {
        let mut gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
        gates.set_roles(["admin", "editor"]);
        gates.set_permissions(["posts.*", "users.read"]);
    }

    let gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    assert_eq!(gates.roles(), ["admin", "editor"]);
    assert_eq!(gates.permissions(), ["posts.*", "users.read"]);
    assert!(gates.is_super_user());
}

#[test]
fn test_file_holds_json_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");

    let mut gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    gates.set_roles(["editor"]);
    gates.set_permissions(Vec::<String>::new());

    let store = FileStore::new(&path);
    assert_eq!(store.get(ROLES_KEY).unwrap().as_deref(), Some(r#"["editor"]"#));
    assert_eq!(store.get(PERMISSIONS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_corrupt_file_denies_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");
    std::fs::write(&path, "not json at all").unwrap();

    let gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    assert!(gates.roles().is_empty());
    assert!(gates.permissions().is_empty());
    assert!(!gates.has_role("editor"));
    assert!(!gates.has_permission("posts.create"));
}

#[test]
fn test_corrupt_file_is_repaired_by_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");
    std::fs::write(&path, "not json").unwrap();

    let mut gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    assert!(gates.roles().is_empty());
    gates.set_roles(["editor"]);
    gates.set_permissions(["posts.*"]);
    assert!(gates.flush().is_ok());

    let fresh = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    assert_eq!(fresh.roles(), ["editor"]);
    assert_eq!(fresh.permissions(), ["posts.*"]);
}

#[test]
fn test_malformed_entry_only_clears_that_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");

    let mut store = FileStore::new(&path);
    store.set(ROLES_KEY, "[\"editor\"").unwrap();
    store.set(PERMISSIONS_KEY, r#"["posts.read"]"#).unwrap();

    let gates = Gates::with_store(config(), Box::new(FileStore::new(&path)));
    assert!(gates.roles().is_empty());
    assert!(gates.has_permission("posts.read"));
}

#[test]
fn test_persistence_disabled_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gates.json");

    let mut gates = Gates::with_store(GatesConfig::default(), Box::new(FileStore::new(&path)));
    gates.set_roles(["editor"]);

    assert!(!path.exists());
}
