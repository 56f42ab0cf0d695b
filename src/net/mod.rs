//! Network layer: single REST calls against the external API.

pub mod api;
