//! Client-side state shared across views.
//!
//! DESIGN
//! ======
//! The credential lives behind an injected store so navigation code never
//! touches `localStorage` directly; `session` layers login/logout on top.

pub mod credential;
pub mod session;
