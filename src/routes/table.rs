//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path the app knows is listed here once, with the metadata the guard
//! and the keep-alive cache read. The table is fixed at compile time.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Views a route can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    Forgot,
    Generate,
    Profile,
}

/// What a matched path leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    /// Unconditional hop to another path, applied before the guard runs.
    Redirect(&'static str),
}

/// Navigation metadata attached to a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// `None` reads as `false`.
    pub requires_auth: Option<bool>,
    /// Retain the view's state across navigations away and back.
    pub keep_alive: bool,
}

impl RouteMeta {
    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteRecord {
    pub fn view(&self) -> Option<ViewId> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

const PUBLIC: RouteMeta = RouteMeta { requires_auth: Some(false), keep_alive: false };
const PROTECTED: RouteMeta = RouteMeta { requires_auth: Some(true), keep_alive: false };

pub static ROUTES: [RouteRecord; 6] = [
    RouteRecord { path: "/", target: RouteTarget::Redirect("/login"), meta: RouteMeta { requires_auth: None, keep_alive: false } },
    RouteRecord { path: "/login", target: RouteTarget::View(ViewId::Login), meta: PUBLIC },
    RouteRecord { path: "/register", target: RouteTarget::View(ViewId::Register), meta: PUBLIC },
    RouteRecord { path: "/forgot", target: RouteTarget::View(ViewId::Forgot), meta: PUBLIC },
    RouteRecord {
        path: "/generate",
        target: RouteTarget::View(ViewId::Generate),
        meta: RouteMeta { requires_auth: Some(true), keep_alive: true },
    },
    RouteRecord { path: "/profile", target: RouteTarget::View(ViewId::Profile), meta: PROTECTED },
];

/// Lookup over a slice of records.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    records: &'static [RouteRecord],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { records: &ROUTES }
    }
}

impl RouteTable {
    #[cfg(test)]
    pub(crate) fn new(records: &'static [RouteRecord]) -> Self {
        Self { records }
    }

    /// Exact match on the path component; one trailing slash is ignored.
    pub fn find(&self, path: &str) -> Option<&'static RouteRecord> {
        let wanted = strip_trailing_slash(path);
        self.records.iter().find(|record| record.path == wanted)
    }

    /// Path of the record rendering `view`.
    pub fn path_of(&self, view: ViewId) -> Option<&'static str> {
        self.records.iter().find(|record| record.view() == Some(view)).map(|record| record.path)
    }
}

fn strip_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
