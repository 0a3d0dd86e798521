//! Request DTOs for the recipe server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::store::{Ingredient, Recipe};

/// Request body for creating (POST /recipes) or replacing (PUT /recipes/:id)
/// a recipe.
///
/// An `id` field in the body is accepted and ignored; the store owns ids.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl RecipeRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Recipe name cannot be empty".to_string());
        }
        if self.ingredients.iter().any(|i| i.name.trim().is_empty()) {
            return Some("Ingredient name cannot be empty".to_string());
        }
        None
    }

    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: 0,
            name: self.name,
            steps: self.steps,
            ingredients: self.ingredients,
        }
    }
}
