//! API Routes
//!
//! Configures the Axum router with all recipe server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_recipe_handler, delete_recipe_handler, export_data_handler, export_report_handler,
    get_recipe_handler, health_handler, import_data_handler, list_recipes_handler,
    update_recipe_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /recipes` - Create a recipe
/// - `GET /recipes` - List all recipes
/// - `GET /recipes/:id` - Fetch a recipe
/// - `PUT /recipes/:id` - Replace a recipe
/// - `DELETE /recipes/:id` - Delete a recipe
/// - `GET /recipes/getAllRecipe` - Download all recipes as a text report
/// - `GET /files/export` - Download the data file
/// - `POST /files/import` - Replace all recipes from a data file
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments take priority over `:id`
    Router::new()
        .route(
            "/recipes",
            post(create_recipe_handler).get(list_recipes_handler),
        )
        .route("/recipes/getAllRecipe", get(export_report_handler))
        .route(
            "/recipes/:id",
            get(get_recipe_handler)
                .put(update_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .route("/files/export", get(export_data_handler))
        .route("/files/import", post(import_data_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
