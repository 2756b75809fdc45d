//! Build-time front-end configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values come from `option_env!` at compile time so a static bundle carries
//! its own settings. Everything here is public; never put secrets in it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/generate";
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// Front-end settings shared by the guard, session helpers and API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `localStorage` key holding the credential.
    pub token_key: String,
    /// Path unauthenticated navigations are sent to.
    pub login_path: String,
    /// Where a successful login lands when no return target was requested.
    pub landing_path: String,
    /// Query parameter carrying the originally requested full path.
    pub redirect_key: String,
    /// Prefix for backend requests; empty means same origin.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            landing_path: DEFAULT_LANDING_PATH.to_owned(),
            redirect_key: REDIRECT_QUERY_KEY.to_owned(),
            api_base_url: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `CLIPNOTE_TOKEN_KEY`: default `token`
    /// - `CLIPNOTE_LOGIN_PATH`: default `/login`
    /// - `CLIPNOTE_LANDING_PATH`: default `/generate`
    /// - `CLIPNOTE_API_BASE_URL`: default same origin
    /// - `CLIPNOTE_LOG_LEVEL`: `error`..`trace`, default `info` (`debug` in debug builds)
    pub fn load() -> Self {
        Self::from_values(&BuildValues {
            token_key: option_env!("CLIPNOTE_TOKEN_KEY"),
            login_path: option_env!("CLIPNOTE_LOGIN_PATH"),
            landing_path: option_env!("CLIPNOTE_LANDING_PATH"),
            api_base_url: option_env!("CLIPNOTE_API_BASE_URL"),
            log_level: option_env!("CLIPNOTE_LOG_LEVEL"),
        })
    }

    fn from_values(values: &BuildValues<'_>) -> Self {
        let defaults = Self::default();
        Self {
            token_key: non_empty(values.token_key).map_or(defaults.token_key, str::to_owned),
            login_path: non_empty(values.login_path)
                .map_or(defaults.login_path, normalize_route_path),
            landing_path: non_empty(values.landing_path)
                .map_or(defaults.landing_path, normalize_route_path),
            redirect_key: defaults.redirect_key,
            api_base_url: non_empty(values.api_base_url)
                .map_or(defaults.api_base_url, |v| v.trim_end_matches('/').to_owned()),
            log_level: parse_log_level(values.log_level).unwrap_or(defaults.log_level),
        }
    }

    /// Join a backend path onto the configured base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

#[derive(Default)]
struct BuildValues<'a> {
    token_key: Option<&'a str>,
    login_path: Option<&'a str>,
    landing_path: Option<&'a str>,
    api_base_url: Option<&'a str>,
    log_level: Option<&'a str>,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_route_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_log_level(raw: Option<&str>) -> Option<log::Level> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}
