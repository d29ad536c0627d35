//! Folio: a server-rendered personal portfolio.
//!
//! - [`models`] and [`content`]: the portfolio content.
//! - [`effects`]: scroll reveal, typewriter and project filter state.
//! - [`render`]: pure HTML views over that state.
//! - [`api`]: the axum router serving the page and its JSON/SSE endpoints.

pub mod api;
pub mod client;
pub mod config;
pub mod content;
pub mod effects;
pub mod models;
pub mod render;
