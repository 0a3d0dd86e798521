//! Recipe Book - A small recipe server
//!
//! Provides JSON CRUD endpoints for recipes, a plain-text report download,
//! and a JSON data file that survives restarts.

pub mod api;
pub mod config;
pub mod error;
pub mod files;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
