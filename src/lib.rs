//! # clipnote-web
//!
//! Leptos CSR front end for the clipnote video summarizer.
//!
//! The crate owns client-side navigation: a static route table, a guard that
//! sends unauthenticated users to `/login`, and the keep-alive cache for views
//! that must survive navigation. Views, the credential store, and the backend
//! login call hang off that core. Browser-only code sits behind the `csr`
//! feature so the navigation logic builds and tests natively.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Install the browser panic hook and logger, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let level = config::AppConfig::load().log_level;
    let _ = console_log::init_with_level(level);
    log::info!("clipnote-web starting");
    leptos::mount::mount_to_body(app::App);
}
