//! Navigation resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppRouter` is the router instance the app mounts. Given a requested full
//! path it follows record redirects, runs the guard, follows a guard redirect
//! as a fresh navigation, and reports which view to render at which path.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::routes::guard::{self, NavigationOutcome, NavigationRequest};
use crate::routes::location::FullPath;
use crate::routes::table::{RouteTable, RouteTarget, ViewId};
use crate::state::credential::{CredentialStore, SharedStore};

/// Upper bound on redirect hops within one navigation.
pub const MAX_REDIRECTS: usize = 8;

/// Where a navigation ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub requested: FullPath,
    /// Final full path; differs from `requested` after a redirect.
    pub path: FullPath,
    /// `None` renders the not-found view.
    pub view: Option<ViewId>,
    pub keep_alive: bool,
    pub redirected: bool,
}

/// Route table, guard inputs and config, shared through context.
#[derive(Clone)]
pub struct AppRouter {
    table: RouteTable,
    store: SharedStore,
    config: Arc<AppConfig>,
}

impl AppRouter {
    pub fn new(table: RouteTable, store: SharedStore, config: AppConfig) -> Self {
        Self { table, store, config: Arc::new(config) }
    }

    /// Path of the record that renders `view`, for links and redirects.
    pub fn href(&self, view: ViewId) -> &'static str {
        self.table.path_of(view).unwrap_or("/")
    }

    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve a navigation from `from` (if any) to `to`.
    pub fn navigate(&self, to: &FullPath, from: Option<&FullPath>) -> Resolution {
        let mut current = to.clone();

        for _ in 0..=MAX_REDIRECTS {
            let record = self.table.find(&current.path);

            if let Some(RouteTarget::Redirect(next)) = record.map(|r| r.target) {
                current = current.with_path(next);
                continue;
            }

            let request = NavigationRequest { target: record, to: &current, from };
            let mut outcome = NavigationOutcome::Proceed;
            guard::before_each(&request, self.store.as_ref(), &self.config, |decided| outcome = decided);
            match outcome {
                NavigationOutcome::Redirect(next) => current = next,
                NavigationOutcome::Proceed => {
                    return Resolution {
                        requested: to.clone(),
                        redirected: current != *to,
                        view: record.and_then(|r| r.view()),
                        keep_alive: record.is_some_and(|r| r.meta.keep_alive),
                        path: current,
                    };
                }
            }
        }

        log::warn!("navigation to {to} exceeded {MAX_REDIRECTS} redirects; stopped at {current}");
        Resolution { requested: to.clone(), path: current, view: None, keep_alive: false, redirected: true }
    }
}
