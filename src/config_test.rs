use super::*;

#[test]
fn default_matches_documented_values() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.token_key, "token");
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.landing_path, "/generate");
    assert_eq!(cfg.redirect_key, "redirect");
    assert_eq!(cfg.api_base_url, "");
}

#[test]
fn from_values_without_overrides_is_default() {
    assert_eq!(AppConfig::from_values(&BuildValues::default()), AppConfig::default());
}

#[test]
fn from_values_applies_overrides() {
    let cfg = AppConfig::from_values(&BuildValues {
        token_key: Some("clipnote_token"),
        login_path: Some("signin/"),
        landing_path: Some("/profile"),
        api_base_url: Some("https://api.example.com/"),
        log_level: Some("WARN"),
    });
    assert_eq!(cfg.token_key, "clipnote_token");
    assert_eq!(cfg.login_path, "/signin");
    assert_eq!(cfg.landing_path, "/profile");
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert_eq!(cfg.log_level, log::Level::Warn);
}

#[test]
fn from_values_ignores_blank_values() {
    let cfg = AppConfig::from_values(&BuildValues {
        token_key: Some("  "),
        login_path: Some(""),
        ..BuildValues::default()
    });
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);
    assert_eq!(cfg.login_path, DEFAULT_LOGIN_PATH);
}

#[test]
fn unknown_log_level_falls_back_to_default() {
    let cfg = AppConfig::from_values(&BuildValues { log_level: Some("loud"), ..BuildValues::default() });
    assert_eq!(cfg.log_level, default_log_level());
}

#[test]
fn api_url_joins_base_and_path() {
    let cfg = AppConfig { api_base_url: "https://api.example.com".to_owned(), ..AppConfig::default() };
    assert_eq!(cfg.api_url("/api/auth/login"), "https://api.example.com/api/auth/login");
    assert_eq!(AppConfig::default().api_url("/api/auth/login"), "/api/auth/login");
}
