use super::*;
use std::sync::Mutex;

use serde_json::json;

use crate::storage::{KeyValueStore, MemoryStore};

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, segments: &[&str]) {
        self.visits.lock().unwrap().push(crate::navigator::path_for(segments));
    }
}

struct Harness {
    kv: Arc<MemoryStore>,
    nav: Arc<RecordingNavigator>,
    store: SessionStore,
}

fn harness_with(kv: Arc<MemoryStore>, directory: CredentialDirectory) -> Harness {
    let nav = Arc::new(RecordingNavigator::default());
    let store = SessionStore::new(Persistence::new(kv.clone()), nav.clone(), Arc::new(directory));
    Harness { kv, nav, store }
}

fn harness() -> Harness {
    harness_with(Arc::new(MemoryStore::new()), CredentialDirectory::seeded().unwrap())
}

fn bill() -> Credentials {
    Credentials::new("test@gmail.com", "test")
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_without_persisted_user_is_empty() {
    let h = harness();
    assert!(h.store.current_identity().is_none());
    assert!(!h.store.is_authenticated());
}

#[test]
fn new_store_restores_persisted_user() {
    let kv = Arc::new(MemoryStore::new());
    kv.set_item(CURRENT_USER_KEY, r#"{"id":2,"first_name":"Jill","user_type":"user"}"#);
    let h = harness_with(kv, CredentialDirectory::default());
    let identity = h.store.current_identity().unwrap();
    assert_eq!(identity.id, 2);
    assert_eq!(identity.user_type(), Some("user"));
}

#[test]
fn new_store_ignores_corrupt_persisted_user() {
    let kv = Arc::new(MemoryStore::new());
    kv.set_item(CURRENT_USER_KEY, "{oops");
    let h = harness_with(kv, CredentialDirectory::default());
    assert!(h.store.current_identity().is_none());
}

#[test]
fn new_store_redacts_restored_password() {
    let kv = Arc::new(MemoryStore::new());
    kv.set_item(CURRENT_USER_KEY, r#"{"id":1,"first_name":"Bill","email":"test@gmail.com","password":"test"}"#);
    let h = harness_with(kv, CredentialDirectory::default());
    let identity = h.store.current_identity().unwrap();
    assert_eq!(identity.id, 1);
    assert_eq!(identity.password, "");
}

#[test]
fn new_store_restores_record_with_null_fields() {
    let kv = Arc::new(MemoryStore::new());
    kv.set_item(CURRENT_USER_KEY, r#"{"id":1,"first_name":"Bill","last_name":null,"email":"test@gmail.com"}"#);
    let h = harness_with(kv, CredentialDirectory::default());
    let identity = h.store.current_identity().unwrap();
    assert_eq!(identity.first_name, "Bill");
    assert_eq!(identity.last_name, "");
}

#[test]
fn new_store_discards_wrongly_typed_record() {
    let kv = Arc::new(MemoryStore::new());
    kv.set_item(CURRENT_USER_KEY, r#"{"id":"one","email":"test@gmail.com"}"#);
    let h = harness_with(kv, CredentialDirectory::default());
    assert!(h.store.current_identity().is_none());
}

// =============================================================
// authenticate
// =============================================================

#[test]
fn authenticate_returns_matching_identity() {
    let h = harness();
    let identity = h.store.authenticate(&bill()).unwrap();
    assert_eq!(identity.id, 1);
    assert_eq!(identity.first_name, "Bill");
    assert_eq!(identity.last_name, "Robinson");
    assert_eq!(identity.email, "test@gmail.com");
    assert_eq!(identity.user_type(), Some("host"));
    assert_eq!(h.store.current_identity(), Some(identity));
}

#[test]
fn authenticate_clears_password_everywhere() {
    let h = harness();
    let identity = h.store.authenticate(&bill()).unwrap();
    assert_eq!(identity.password, "");
    assert!(!h.kv.get_item(CURRENT_USER_KEY).unwrap().contains("\"password\":\"test\""));
}

#[test]
fn authenticate_persists_user_and_token() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    let raw_user = h.kv.get_item(CURRENT_USER_KEY).unwrap();
    let stored: Identity = serde_json::from_str(&raw_user).unwrap();
    assert_eq!(stored.id, 1);
    let token = h.store.access_token().unwrap();
    assert!(!token.is_empty());
}

#[test]
fn authenticate_navigates_home() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    assert_eq!(h.nav.visits(), vec!["/home".to_owned()]);
}

#[test]
fn authenticate_wrong_password_is_not_found() {
    let h = harness();
    let err = h.store.authenticate(&Credentials::new("test@gmail.com", "wrong")).unwrap_err();
    assert_eq!(err, AuthError::NotFound);
    assert_eq!(err.status(), 404);
}

#[test]
fn failed_authenticate_leaves_state_untouched() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    let token = h.store.access_token();
    let before = h.store.current_identity();

    assert!(h.store.authenticate(&Credentials::new("nobody@gmail.com", "test")).is_err());

    assert_eq!(h.store.current_identity(), before);
    assert_eq!(h.store.access_token(), token);
    assert_eq!(h.nav.visits().len(), 1);
}

#[test]
fn failed_authenticate_on_empty_session_writes_nothing() {
    let h = harness();
    assert!(h.store.authenticate(&Credentials::new("", "")).is_err());
    assert!(h.kv.is_empty());
    assert!(h.nav.visits().is_empty());
}

#[test]
fn single_record_scenario() {
    let directory = CredentialDirectory::from_records(&[json!({
        "email": "test@gmail.com",
        "password": "test",
        "id": 1,
        "first_name": "Bill",
    })])
    .unwrap();
    let h = harness_with(Arc::new(MemoryStore::new()), directory);

    assert_eq!(h.store.authenticate(&bill()).unwrap().id, 1);
    assert_eq!(
        h.store.authenticate(&Credentials::new("test@gmail.com", "wrong")),
        Err(AuthError::NotFound)
    );
}

#[test]
fn second_login_replaces_first() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    let first_token = h.store.access_token();
    h.store.authenticate(&Credentials::new("testtwo@gmail.com", "test")).unwrap();
    assert_eq!(h.store.current_identity().unwrap().id, 2);
    assert_ne!(h.store.access_token(), first_token);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_persistence_and_identity() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    h.store.logout();
    assert!(h.kv.get_item(CURRENT_USER_KEY).is_none());
    assert!(h.kv.get_item(ACCESS_TOKEN_KEY).is_none());
    assert!(h.store.current_identity().is_none());
    assert!(h.store.access_token().is_none());
}

#[test]
fn logout_navigates_to_login() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    h.store.logout();
    assert_eq!(h.nav.visits(), vec!["/home".to_owned(), "/login".to_owned()]);
}

#[test]
fn logout_twice_matches_logout_once() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    h.store.logout();
    let after_once = (h.store.current_identity(), h.kv.len());
    h.store.logout();
    assert_eq!((h.store.current_identity(), h.kv.len()), after_once);
}

#[test]
fn logout_without_session_is_harmless() {
    let h = harness();
    h.store.logout();
    assert!(h.store.current_identity().is_none());
    assert!(h.kv.is_empty());
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn late_subscriber_receives_current_identity_first() {
    let h = harness();
    h.store.authenticate(&bill()).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = h.store.subscribe(move |id| sink.lock().unwrap().push(id.as_ref().map(|i| i.id)));
    assert_eq!(*seen.lock().unwrap(), vec![Some(1)]);
}

#[test]
fn subscriber_follows_login_and_logout() {
    let h = harness();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = h.store.subscribe(move |id| sink.lock().unwrap().push(id.as_ref().map(|i| i.id)));
    h.store.authenticate(&bill()).unwrap();
    h.store.logout();
    assert_eq!(*seen.lock().unwrap(), vec![None, Some(1), None]);
}

#[test]
fn subscriber_observes_persistence_already_written() {
    let h = harness();
    let kv = h.kv.clone();
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let _sub = h.store.subscribe(move |id| {
        let persisted = kv.get_item(CURRENT_USER_KEY).is_some();
        sink.lock().unwrap().push((id.is_some(), persisted));
    });
    h.store.authenticate(&bill()).unwrap();
    h.store.logout();
    assert_eq!(*observed.lock().unwrap(), vec![(false, false), (true, true), (false, false)]);
}

#[test]
fn logout_from_subscriber_reaches_later_subscribers_last() {
    let h = harness();
    let store = h.store.clone();
    let _kick = h.store.subscribe(move |id| {
        if id.is_some() {
            store.logout();
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _watch = h.store.subscribe(move |id| sink.lock().unwrap().push(id.as_ref().map(|i| i.id)));

    h.store.authenticate(&bill()).unwrap();

    assert!(h.store.current_identity().is_none());
    assert_eq!(seen.lock().unwrap().last(), Some(&None));
    assert_eq!(h.nav.visits(), vec!["/login".to_owned()]);
}

#[test]
fn clones_share_session() {
    let h = harness();
    let other = h.store.clone();
    h.store.authenticate(&bill()).unwrap();
    assert_eq!(other.current_identity().unwrap().id, 1);
}

#[test]
fn disposed_subscription_survives_store_drop() {
    let h = harness();
    let mut sub = h.store.subscribe(|_| {});
    drop(h);
    sub.dispose();
    sub.dispose();
    assert!(!sub.is_active());
}
