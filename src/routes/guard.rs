//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation. A target that requires auth, reached
//! without a stored credential, is redirected to the login path with the
//! requested full path attached so login can send the user back. Everything
//! else proceeds.
//!
//! The check is UX only; the backend still has to reject bad tokens.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::AppConfig;
use crate::routes::location::FullPath;
use crate::routes::table::RouteRecord;
use crate::state::credential::{CredentialStore, read_credential};

/// One pending transition.
#[derive(Clone, Copy, Debug)]
pub struct NavigationRequest<'a> {
    /// Matched record; `None` for unknown paths.
    pub target: Option<&'a RouteRecord>,
    pub to: &'a FullPath,
    pub from: Option<&'a FullPath>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed,
    Redirect(FullPath),
}

/// Decide the outcome of `request` against the credential in `store`.
pub fn decide(request: &NavigationRequest<'_>, store: &dyn CredentialStore, config: &AppConfig) -> NavigationOutcome {
    let requires_auth = request.target.is_some_and(|record| record.meta.requires_auth());
    if !requires_auth {
        return NavigationOutcome::Proceed;
    }
    if read_credential(store, &config.token_key).is_some() {
        return NavigationOutcome::Proceed;
    }

    let redirect = request.to.login_redirect(&config.login_path, &config.redirect_key);
    log::debug!(
        "guard: no credential for {}, redirecting to {redirect} (from {})",
        request.to,
        request.from.map_or_else(|| "<start>".to_owned(), ToString::to_string),
    );
    NavigationOutcome::Redirect(redirect)
}

/// Continuation form of [`decide`]: `next` is called exactly once.
pub fn before_each<F>(request: &NavigationRequest<'_>, store: &dyn CredentialStore, config: &AppConfig, next: F)
where
    F: FnOnce(NavigationOutcome),
{
    next(decide(request, store, config));
}
