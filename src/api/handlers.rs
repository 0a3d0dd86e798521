//! API Handlers
//!
//! HTTP request handlers for each recipe server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::{error, info, warn};

use crate::error::{RecipeError, Result};
use crate::files::FileService;
use crate::models::{HealthResponse, ImportResponse, RecipeRequest};
use crate::store::{Recipe, RecipeStore, Snapshot};

/// Application state shared across all handlers.
///
/// Contains the recipe store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe recipe store
    pub store: Arc<RwLock<RecipeStore>>,
    /// Data file and report file access
    pub files: Arc<FileService>,
    /// Write the store to the data file after each mutation
    pub persist: bool,
}

impl AppState {
    /// Creates a new AppState with the given store and no data file persistence.
    ///
    /// Report temp files go to the system temp directory.
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            files: Arc::new(FileService::new(std::env::temp_dir(), "recipes.json")),
            persist: false,
        }
    }

    /// Creates an AppState around explicit file access.
    pub fn with_files(store: RecipeStore, files: FileService, persist: bool) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            files: Arc::new(files),
            persist,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// When persistence is enabled the store is restored from the data file.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let files = FileService::from_config(config);
        let mut store = RecipeStore::new();

        if config.persist_data {
            if let Some(snapshot) = files.load_snapshot()? {
                store.restore(snapshot)?;
                info!(
                    "Restored {} recipes from {:?}",
                    store.len(),
                    files.data_file_path()
                );
            }
        }

        Ok(Self::with_files(store, files, config.persist_data))
    }

    /// Writes the store to the data file if persistence is enabled.
    ///
    /// The file write runs on the blocking pool. Callers hold the write lock
    /// across the await so snapshots land in mutation order. Failures are
    /// logged and do not fail the request.
    async fn save_store(&self, store: &RecipeStore) {
        if !self.persist {
            return;
        }

        let snapshot = store.snapshot();
        let files = self.files.clone();
        match tokio::task::spawn_blocking(move || files.save_snapshot(&snapshot)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to save recipes to data file: {}", e),
            Err(e) => warn!("Data file save task failed: {}", e),
        }
    }
}

/// Handler for POST /recipes
///
/// Responds with the bare id assigned to the new recipe.
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<u64>> {
    if let Some(error_msg) = req.validate() {
        return Err(RecipeError::InvalidRequest(error_msg));
    }

    let mut store = state.store.write().await;
    let id = store.add(req.into_recipe())?;
    state.save_store(&store).await;

    info!("Created recipe {}", id);
    Ok(Json(id))
}

/// Handler for GET /recipes/:id
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Recipe>> {
    let store = state.store.read().await;
    let recipe = store.get(id)?.clone();

    Ok(Json(recipe))
}

/// Handler for GET /recipes
pub async fn list_recipes_handler(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let store = state.store.read().await;
    Json(store.list())
}

/// Handler for PUT /recipes/:id
///
/// Replaces name, steps and ingredients; the id is kept.
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<Recipe>> {
    if let Some(error_msg) = req.validate() {
        return Err(RecipeError::InvalidRequest(error_msg));
    }

    let mut store = state.store.write().await;
    let updated = store.update(id, req.into_recipe())?;
    state.save_store(&store).await;

    info!("Updated recipe {}", id);
    Ok(Json(updated))
}

/// Handler for DELETE /recipes/:id
///
/// Responds 200 with an empty body.
pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    let mut store = state.store.write().await;
    if !store.delete(id) {
        return Err(RecipeError::NotFound(id));
    }
    state.save_store(&store).await;

    info!("Deleted recipe {}", id);
    Ok(StatusCode::OK)
}

/// Handler for GET /recipes/getAllRecipe
///
/// Renders every recipe into a temp file and returns its contents as a
/// `text/plain` attachment. An empty report is 204 No Content.
pub async fn export_report_handler(State(state): State<AppState>) -> Result<Response> {
    let recipes = state.store.read().await.list();
    let files = state.files.clone();

    let report = tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
        let file = files.write_report(&recipes)?;
        Ok(std::fs::read(file.path())?)
    })
    .await
    .map_err(|e| RecipeError::Internal(format!("Report task failed: {}", e)))?;

    let bytes = report.inspect_err(|e| error!("Failed to generate recipe report: {}", e))?;
    if bytes.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let filename = format!("{}-report.txt", Local::now().format("%Y-%m-%dT%H-%M-%S"));
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((StatusCode::OK, headers, bytes).into_response())
}

/// Handler for GET /files/export
///
/// Downloads the store in data file format. An empty store is 204 No Content.
pub async fn export_data_handler(State(state): State<AppState>) -> Result<Response> {
    let snapshot = {
        let store = state.store.read().await;
        if store.is_empty() {
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
        store.snapshot()
    };

    let json = serde_json::to_vec_pretty(&snapshot)?;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"recipes.json\"".to_string(),
        ),
    ];

    Ok((StatusCode::OK, headers, json).into_response())
}

/// Handler for POST /files/import
///
/// Replaces the whole store with the uploaded data file. Snapshots whose ids
/// leave no room for new recipes are rejected with 400.
pub async fn import_data_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportResponse>> {
    let snapshot: Snapshot = serde_json::from_slice(&body)
        .map_err(|e| RecipeError::InvalidRequest(format!("Invalid data file: {}", e)))?;

    let mut store = state.store.write().await;
    store.restore(snapshot)?;
    state.save_store(&store).await;

    info!("Imported {} recipes", store.len());
    Ok(Json(ImportResponse::new(store.len())))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Ingredient;

    fn soup_request() -> RecipeRequest {
        RecipeRequest {
            name: "Soup".to_string(),
            steps: vec!["Chop".to_string(), "Boil".to_string()],
            ingredients: vec![Ingredient::new("carrot", "2 pcs")],
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = AppState::new(RecipeStore::new());

        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();

        let result = get_recipe_handler(State(state.clone()), Path(id)).await;
        let recipe = result.unwrap();
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.steps, vec!["Chop", "Boil"]);
    }

    #[tokio::test]
    async fn test_get_nonexistent_recipe() {
        let state = AppState::new(RecipeStore::new());

        let result = get_recipe_handler(State(state), Path(1)).await;
        assert!(matches!(result, Err(RecipeError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = AppState::new(RecipeStore::new());

        let mut req = soup_request();
        req.name = String::new();
        let result = create_recipe_handler(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(RecipeError::InvalidRequest(_))));
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::new(RecipeStore::new());
        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();

        let mut req = soup_request();
        req.name = "Stew".to_string();
        let updated = update_recipe_handler(State(state.clone()), Path(id), Json(req))
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Stew");

        let missing = update_recipe_handler(State(state), Path(99), Json(soup_request())).await;
        assert!(matches!(missing, Err(RecipeError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::new(RecipeStore::new());
        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();

        let status = delete_recipe_handler(State(state.clone()), Path(id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);

        let result = get_recipe_handler(State(state.clone()), Path(id)).await;
        assert!(result.is_err());

        let result = delete_recipe_handler(State(state), Path(id)).await;
        assert!(matches!(result, Err(RecipeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_export_report_empty_store() {
        let state = AppState::new(RecipeStore::new());

        let response = export_report_handler(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_export_report_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let mut store = RecipeStore::new();
        store.add(Recipe::new("Bread")).unwrap();
        let state = AppState::with_files(store, FileService::new(&blocker, "recipes.json"), false);

        let result = export_report_handler(State(state)).await;
        let err = result.err().unwrap();
        assert!(matches!(err, RecipeError::Io(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_mutations_persist_to_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileService::new(dir.path(), "recipes.json");
        let state = AppState::with_files(RecipeStore::new(), files.clone(), true);

        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();
        let saved = files.load_snapshot().unwrap().unwrap();
        assert!(saved.recipes.contains_key(&id));

        delete_recipe_handler(State(state), Path(id))
            .await
            .unwrap();
        let saved = files.load_snapshot().unwrap().unwrap();
        assert!(saved.recipes.is_empty());
        assert_eq!(saved.next_id, id + 1);
    }

    #[tokio::test]
    async fn test_create_when_ids_exhausted() {
        let mut store = RecipeStore::new();
        store
            .restore(Snapshot {
                next_id: u64::MAX - 1,
                recipes: Default::default(),
            })
            .unwrap();
        let state = AppState::new(store);

        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();
        assert_eq!(id, u64::MAX - 1);

        let err = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RecipeError::IdsExhausted));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(state.store.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_import_out_of_range_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileService::new(dir.path(), "recipes.json");
        let state = AppState::with_files(RecipeStore::new(), files.clone(), true);
        let Json(id) = create_recipe_handler(State(state.clone()), Json(soup_request()))
            .await
            .unwrap();

        let body = Bytes::from(format!(
            r#"{{"next_id":1,"recipes":{{"{}":{{"name":"x"}}}}}}"#,
            u64::MAX
        ));
        let err = import_data_handler(State(state.clone()), body)
            .await
            .err()
            .unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        // Store and data file keep the earlier contents
        assert!(state.store.read().await.get(id).is_ok());
        let saved = files.load_snapshot().unwrap().unwrap();
        assert!(saved.recipes.contains_key(&id));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
