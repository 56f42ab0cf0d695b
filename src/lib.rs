//! # photoshare
//!
//! Leptos + WASM client for the PhotoShare application: authentication
//! screens, a photo library with a detail view, a photo upload form, and a
//! games page with a balance widget, composed with client-side routing that
//! gates pages by login state.
//!
//! The load-bearing core is small: the session record persisted in tab
//! storage (`state::session`) and the two route guard components
//! (`components::route_guard`). Everything else is a leaf consumer of those
//! two pieces. All network traffic is single REST calls against an external
//! API; this crate has no server side.

pub mod app;
pub mod components;
pub mod db;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
