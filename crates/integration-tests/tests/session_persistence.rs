//! Integration tests for session mirroring into storage backends.

#![allow(clippy::unwrap_used)]

use secrecy::ExposeSecret;
use sneakerhub_cli::JsonFileStore;
use sneakerhub_core::session::keys;
use sneakerhub_core::{KeyValueStore, MemoryStore, Navigation, Route, SessionStore, before_each};
use sneakerhub_integration_tests::TestDir;

// =============================================================================
// Memory store
// =============================================================================

#[test]
fn test_login_logout_clears_every_key() {
    let mut storage = MemoryStore::new();
    storage.set("unrelated", "keep-me").unwrap();

    let mut session = SessionStore::new(storage);
    session.login("tok1", true, "u1", "a@b.com");
    assert!(session.is_logged_in());
    assert!(session.is_admin_user());

    session.logout();
    assert!(!session.is_logged_in());

    let storage = session.into_storage();
    for key in keys::ALL {
        assert!(!storage.contains(key), "{key} should be removed");
    }
    assert!(storage.contains("unrelated"));
}

#[test]
fn test_garbage_admin_flag_does_not_panic() {
    let storage = MemoryStore::with_entries([
        (keys::TOKEN, "tok"),
        (keys::IS_ADMIN, "definitely not json"),
    ]);
    let session = SessionStore::new(storage);
    assert!(session.is_logged_in());
    assert!(!session.is_admin_user());
}

#[test]
fn test_guard_follows_session_state() {
    let orders = Route::new("/orders", "OrderTracker").requires_auth();
    let mut session = SessionStore::new(MemoryStore::new());

    assert_eq!(
        before_each(&orders, &session),
        Navigation::Redirect("/login".to_string())
    );
    session.login("tok", false, "u1", "a@b.com");
    assert_eq!(before_each(&orders, &session), Navigation::Proceed);
    session.logout();
    assert!(matches!(before_each(&orders, &session), Navigation::Redirect(_)));
}

// =============================================================================
// File store
// =============================================================================

#[test]
fn test_session_survives_restart_on_disk() {
    let dir = TestDir::new();
    let path = dir.path().join("storage.json");

    {
        let mut session = SessionStore::new(JsonFileStore::open(&path).unwrap());
        session.login("disk-token", true, "u42", "disk@example.com");
    }

    let restored = SessionStore::new(JsonFileStore::open(&path).unwrap());
    assert!(restored.is_logged_in());
    assert!(restored.is_admin_user());
    assert_eq!(restored.current_user_id(), Some("u42"));
    assert_eq!(restored.current_user_email(), Some("disk@example.com"));
    assert_eq!(restored.token().unwrap().expose_secret(), "disk-token");
}

#[test]
fn test_admin_flag_written_as_json_boolean() {
    let dir = TestDir::new();
    let path = dir.path().join("storage.json");
    let mut session = SessionStore::new(JsonFileStore::open(&path).unwrap());
    session.login("tok", true, "u1", "a@b.com");

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[keys::IS_ADMIN], serde_json::json!("true"));
    assert_eq!(parsed[keys::TOKEN], serde_json::json!("tok"));
}

#[test]
fn test_logout_on_disk_removes_keys() {
    let dir = TestDir::new();
    let path = dir.path().join("storage.json");
    let mut session = SessionStore::new(JsonFileStore::open(&path).unwrap());
    session.login("tok", false, "u1", "a@b.com");
    session.logout();

    let store = JsonFileStore::open(&path).unwrap();
    for key in keys::ALL {
        assert_eq!(store.get(key).unwrap(), None, "{key} should be removed");
    }
}

#[test]
fn test_corrupt_storage_file_yields_logged_out_session() {
    let dir = TestDir::new();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{{{ not json").unwrap();

    let mut session = SessionStore::new(JsonFileStore::open(&path).unwrap());
    assert!(!session.is_logged_in());
    assert!(!session.is_admin_user());

    // Writes fail too (the file cannot be parsed), but memory state still updates
    session.login("tok", false, "u1", "a@b.com");
    assert!(session.is_logged_in());
}
