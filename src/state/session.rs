//! Sign-in state on top of the credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the token here and then leaves for the path the
//! guard stashed in `?redirect=`. That value arrives from the URL, so it is
//! only honored when it stays on this origin.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::AppConfig;
use crate::routes::location::FullPath;
use crate::routes::table::RouteTable;
use crate::state::credential::{CredentialStore, StorageError, read_credential};

/// Store `token` as the current credential.
pub fn sign_in(store: &dyn CredentialStore, config: &AppConfig, token: &str) -> Result<(), StorageError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(StorageError::EmptyToken);
    }
    store.set(&config.token_key, token)?;
    log::info!("session: signed in");
    Ok(())
}

/// Forget the current credential.
pub fn sign_out(store: &dyn CredentialStore, config: &AppConfig) -> Result<(), StorageError> {
    store.remove(&config.token_key)?;
    log::info!("session: signed out");
    Ok(())
}

pub fn is_signed_in(store: &dyn CredentialStore, config: &AppConfig) -> bool {
    read_credential(store, &config.token_key).is_some()
}

/// Post-login destination for a raw `redirect` query value.
///
/// Falls back to the landing path unless `raw` is a same-origin absolute
/// path that leads straight to a view other than the login page. Paths the
/// route table redirects (such as `/`) would land on login again.
pub fn return_target(raw: Option<&str>, config: &AppConfig) -> String {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return config.landing_path.clone();
    };
    if !is_local_path(raw) {
        log::warn!("session: ignoring off-site redirect target {raw:?}");
        return config.landing_path.clone();
    }
    let target = FullPath::parse(raw);
    if target.path.trim_end_matches('/') == config.login_path.trim_end_matches('/') {
        return config.landing_path.clone();
    }
    if RouteTable::default().find(&target.path).is_some_and(|record| record.view().is_none()) {
        return config.landing_path.clone();
    }
    target.to_string()
}

fn is_local_path(raw: &str) -> bool {
    raw.starts_with('/')
        && !raw.starts_with("//")
        && !raw.contains('\\')
        && !raw.chars().any(char::is_control)
}
