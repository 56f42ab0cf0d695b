use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

fn session(username: &str, token: &str) -> Session {
    Session {
        username: username.to_owned(),
        token: token.to_owned(),
        avatar: None,
    }
}

// =============================================================
// get: absent and malformed blobs
// =============================================================

#[test]
fn get_is_absent_on_fresh_storage() {
    assert_eq!(store().get(), None);
}

#[test]
fn get_treats_unparseable_blob_as_absent() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, "definitely not json");
    assert_eq!(SessionStore::new(storage).get(), None);
}

#[test]
fn get_treats_wrong_shape_blob_as_absent() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, r#"{"id": 7}"#);
    assert_eq!(SessionStore::new(storage).get(), None);
}

#[test]
fn get_treats_empty_token_as_absent() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, r#"{"username":"vera","token":""}"#);
    assert_eq!(SessionStore::new(storage).get(), None);
}

#[test]
fn get_accepts_well_formed_blob() {
    let storage = MemoryStorage::new();
    storage.write(SESSION_KEY, r#"{"username":"vera","token":"tok-1"}"#);
    assert_eq!(SessionStore::new(storage).get(), Some(session("vera", "tok-1")));
}

// =============================================================
// set / clear lifecycle
// =============================================================

#[test]
fn set_then_get_round_trips() {
    let store = store();
    let s = Session {
        username: "vera".to_owned(),
        token: "tok-1".to_owned(),
        avatar: Some("https://example.test/a.png".to_owned()),
    };
    store.set(&s);
    assert_eq!(store.get(), Some(s));
}

#[test]
fn set_replaces_prior_session() {
    let store = store();
    store.set(&session("vera", "tok-1"));
    store.set(&session("oleh", "tok-2"));
    assert_eq!(store.get(), Some(session("oleh", "tok-2")));
}

#[test]
fn set_writes_a_single_json_blob() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.set(&session("vera", "tok-1"));

    let raw = storage.read(SESSION_KEY).expect("blob present");
    let parsed: Session = serde_json::from_str(&raw).expect("blob is valid json");
    assert_eq!(parsed, session("vera", "tok-1"));
}

#[test]
fn clear_makes_session_absent() {
    let store = store();
    store.set(&session("vera", "tok-1"));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clear_twice_is_idempotent() {
    let store = store();
    store.set(&session("vera", "tok-1"));
    store.clear();
    assert_eq!(store.get(), None);
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn session_survives_until_next_write() {
    let store = store();
    store.set(&session("vera", "tok-1"));
    assert_eq!(store.get(), Some(session("vera", "tok-1")));
    assert_eq!(store.get(), Some(session("vera", "tok-1")));
}
