//! API Module
//!
//! HTTP handlers and routing for the recipe server REST API.
//!
//! # Endpoints
//! - `POST /recipes`, `GET /recipes` - Create and list recipes
//! - `GET|PUT|DELETE /recipes/:id` - Fetch, replace, delete one recipe
//! - `GET /recipes/getAllRecipe` - Plain-text report download
//! - `GET /files/export`, `POST /files/import` - Data file transfer
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
