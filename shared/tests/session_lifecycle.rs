use shared::route::{guard, post_login_target, GuardDecision, Route};
use shared::{MemoryStorage, SessionError, SessionStore};

const KEY: &str = "user";

fn restart(store: SessionStore<MemoryStorage>) -> SessionStore<MemoryStorage> {
    let mut fresh = SessionStore::new(store.into_storage(), KEY);
    fresh.restore();
    fresh
}

#[test]
fn login_then_logout_scenario() {
    let mut store = SessionStore::new(MemoryStorage::new(), KEY);
    store.restore();

    let user = store.login("a@b.com", "x").unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "a");

    store.logout();
    assert!(store.user().is_none());
    assert!(store.storage().get(KEY).is_none());
}

#[test]
fn session_survives_restart() {
    let credentials = [
        ("a@b.com", "x"),
        ("grower@orchard.example", "hunter2"),
        ("no-at-sign", "p"),
        ("ünïcode@frücht.de", "🍌"),
    ];

    for (email, password) in credentials {
        let mut store = SessionStore::new(MemoryStorage::new(), KEY);
        store.restore();
        let user = store.login(email, password).unwrap();

        let store = restart(store);
        assert_eq!(store.user(), Some(&user), "lost session for {email}");
    }
}

#[test]
fn signup_survives_restart() {
    let mut store = SessionStore::new(MemoryStorage::new(), KEY);
    let user = store.signup("a@b.com", "x", "Alice").unwrap();
    let store = restart(store);
    assert_eq!(store.user().map(|u| u.name.as_str()), Some("Alice"));
    assert_eq!(store.user(), Some(&user));
}

#[test]
fn rejected_login_creates_nothing() {
    for (email, password) in [("", "x"), ("a@b.com", ""), ("", "")] {
        let mut store = SessionStore::new(MemoryStorage::new(), KEY);
        store.restore();
        let err = store.login(email, password).unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter email and password");

        let store = restart(store);
        assert!(store.user().is_none());
    }
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut once = SessionStore::new(MemoryStorage::new(), KEY);
    once.login("a@b.com", "x").unwrap();
    once.logout();

    let mut twice = SessionStore::new(MemoryStorage::new(), KEY);
    twice.login("a@b.com", "x").unwrap();
    twice.logout();
    twice.logout();

    assert_eq!(once.user(), twice.user());
    assert_eq!(once.storage().get(KEY), twice.storage().get(KEY));

    let twice = restart(twice);
    assert!(twice.user().is_none());
}

#[test]
fn corrupt_payloads_start_unauthenticated() {
    let payloads = [
        "{",
        "null",
        "[]",
        "\"a string\"",
        "{\"id\":1,\"email\":\"a@b.com\",\"name\":\"a\"}",
        "{\"email\":\"a@b.com\"}",
    ];

    for payload in payloads {
        let mut store = SessionStore::new(MemoryStorage::with_entry(KEY, payload), KEY);
        assert!(store.restore().is_none(), "accepted {payload}");
        assert!(store.storage().get(KEY).is_none());
    }
}

#[test]
fn guard_follows_session_state() {
    let mut store = SessionStore::new(MemoryStorage::new(), KEY);
    assert_eq!(
        guard(Route::Dashboard, store.user(), store.is_initializing()),
        GuardDecision::Pending
    );

    store.restore();
    assert!(matches!(
        guard(Route::Dashboard, store.user(), store.is_initializing()),
        GuardDecision::Redirect { to: Route::Login, .. }
    ));

    store.login("a@b.com", "x").unwrap();
    assert_eq!(
        guard(Route::Dashboard, store.user(), store.is_initializing()),
        GuardDecision::Allow
    );
}

#[test]
fn redirected_visitor_returns_after_login() {
    let mut store = SessionStore::new(MemoryStorage::new(), KEY);
    store.restore();

    let return_to = match guard(Route::Dashboard, store.user(), store.is_initializing()) {
        GuardDecision::Redirect { to, from } => {
            assert_eq!(to, Route::Login);
            Some(from)
        }
        other => panic!("expected a redirect, got {:?}", other),
    };

    store.login("grower@orchard.net", "pw").unwrap();
    let target = post_login_target(return_to);
    assert_eq!(target, Route::Dashboard);
    assert_eq!(
        guard(target, store.user(), store.is_initializing()),
        GuardDecision::Allow
    );
}
