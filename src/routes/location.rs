//! Full-path handling for navigations.
//!
//! A navigation target is what the user typed or clicked: a path with an
//! optional query and hash. The guard needs the whole thing so login can send
//! the user back to exactly where they were going.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path plus optional query (without `?`) and hash (without `#`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullPath {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl FullPath {
    /// Path only, no query or hash.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self { path: if path.is_empty() { "/".to_owned() } else { path }, query: None, hash: None }
    }

    /// Split `path?query#hash`. Empty query/hash parts are dropped.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };
        Self { query, hash, ..Self::new(path) }
    }

    /// Assemble from the pieces a router location exposes. `search` and
    /// `hash` may or may not carry their leading `?`/`#`.
    pub fn from_parts(pathname: &str, search: &str, hash: &str) -> Self {
        Self {
            query: non_empty(search.strip_prefix('?').unwrap_or(search)),
            hash: non_empty(hash.strip_prefix('#').unwrap_or(hash)),
            ..Self::new(pathname)
        }
    }

    /// Same query and hash, different path.
    pub fn with_path(&self, path: &str) -> Self {
        Self { path: path.to_owned(), ..self.clone() }
    }

    /// `login_path?key=<this full path>`.
    pub fn login_redirect(&self, login_path: &str, key: &str) -> Self {
        Self {
            path: login_path.to_owned(),
            query: Some(format!("{key}={}", encode_query_value(&self.to_string()))),
            hash: None,
        }
    }
}

impl fmt::Display for FullPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{hash}")?;
        }
        Ok(())
    }
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_owned())
}

/// Bytes escaped in a query value. Path-like characters (`/`, `?`, `:`, `@`,
/// `=`) and the unreserved marks stay readable; `&`, `#`, `+`, `%`, space and
/// non-ASCII are escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'=')
    .remove(b'$');

/// Percent-encode a query value the way history routers do. A space becomes
/// `+` and a literal `+` becomes `%2B`, so form-style decoders read the value
/// back unchanged.
pub fn encode_query_value(value: &str) -> String {
    // `%` itself is escaped as `%25`, so every `%20` here came from a space.
    utf8_percent_encode(value, QUERY_VALUE).to_string().replace("%20", "+")
}
