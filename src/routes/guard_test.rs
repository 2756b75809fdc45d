use super::*;
use crate::routes::table::RouteTable;
use crate::state::credential::MemoryStore;

const PROTECTED_PATHS: [&str; 2] = ["/generate", "/profile"];
const PUBLIC_PATHS: [&str; 3] = ["/login", "/register", "/forgot"];

fn run(path: &str, store: &MemoryStore) -> NavigationOutcome {
    let to = FullPath::parse(path);
    let target = RouteTable::default().find(&to.path);
    let request = NavigationRequest { target, to: &to, from: None };
    decide(&request, store, &AppConfig::default())
}

fn signed_in() -> MemoryStore {
    MemoryStore::with_entry("token", "jwt-abc")
}

#[test]
fn protected_paths_without_credential_redirect_to_login() {
    let store = MemoryStore::default();
    for path in PROTECTED_PATHS {
        let expected = format!("/login?redirect={path}");
        match run(path, &store) {
            NavigationOutcome::Redirect(to) => assert_eq!(to.to_string(), expected),
            NavigationOutcome::Proceed => panic!("{path} proceeded without a credential"),
        }
    }
}

#[test]
fn profile_without_token_matches_documented_example() {
    assert_eq!(
        run("/profile", &MemoryStore::default()),
        NavigationOutcome::Redirect(FullPath::parse("/login?redirect=/profile"))
    );
}

#[test]
fn public_paths_without_credential_proceed() {
    let store = MemoryStore::default();
    for path in PUBLIC_PATHS {
        assert_eq!(run(path, &store), NavigationOutcome::Proceed, "{path}");
    }
}

#[test]
fn any_path_with_credential_proceeds() {
    let store = signed_in();
    for path in PROTECTED_PATHS.iter().chain(PUBLIC_PATHS.iter()) {
        assert_eq!(run(path, &store), NavigationOutcome::Proceed, "{path}");
    }
}

#[test]
fn login_proceeds_in_any_token_state() {
    assert_eq!(run("/login", &MemoryStore::default()), NavigationOutcome::Proceed);
    assert_eq!(run("/login", &signed_in()), NavigationOutcome::Proceed);
    assert_eq!(run("/login", &MemoryStore::with_entry("token", "")), NavigationOutcome::Proceed);
}

#[test]
fn empty_token_counts_as_absent() {
    let store = MemoryStore::with_entry("token", "");
    assert!(matches!(run("/generate", &store), NavigationOutcome::Redirect(_)));
}

#[test]
fn unknown_path_proceeds() {
    assert_eq!(run("/does-not-exist", &MemoryStore::default()), NavigationOutcome::Proceed);
}

#[test]
fn root_record_itself_has_no_auth_requirement() {
    assert_eq!(run("/", &MemoryStore::default()), NavigationOutcome::Proceed);
}

#[test]
fn redirect_keeps_original_query_and_hash() {
    match run("/generate?task=7#out", &MemoryStore::default()) {
        NavigationOutcome::Redirect(to) => {
            assert_eq!(to.to_string(), "/login?redirect=/generate?task=7%23out");
        }
        NavigationOutcome::Proceed => panic!("expected redirect"),
    }
}

#[test]
fn guard_reads_configured_key_and_login_path() {
    let config = AppConfig {
        token_key: "clipnote_token".to_owned(),
        login_path: "/signin".to_owned(),
        ..AppConfig::default()
    };
    let to = FullPath::new("/profile");
    let target = RouteTable::default().find("/profile");
    let request = NavigationRequest { target, to: &to, from: None };

    let wrong_key = signed_in();
    assert_eq!(
        decide(&request, &wrong_key, &config),
        NavigationOutcome::Redirect(FullPath::parse("/signin?redirect=/profile"))
    );

    let right_key = MemoryStore::with_entry("clipnote_token", "jwt");
    assert_eq!(decide(&request, &right_key, &config), NavigationOutcome::Proceed);
}

#[test]
fn before_each_calls_continuation_once_with_decision() {
    let store = MemoryStore::default();
    let to = FullPath::new("/profile");
    let from = FullPath::new("/login");
    let target = RouteTable::default().find("/profile");
    let request = NavigationRequest { target, to: &to, from: Some(&from) };

    let mut calls = Vec::new();
    before_each(&request, &store, &AppConfig::default(), |outcome| calls.push(outcome));

    assert_eq!(calls, vec![NavigationOutcome::Redirect(FullPath::parse("/login?redirect=/profile"))]);
}
