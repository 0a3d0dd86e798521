//! Recipe Model
//!
//! Defines the recipe record and its ingredients.

use serde::{Deserialize, Serialize};

// == Ingredient ==
/// A single ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, e.g. "flour"
    pub name: String,
    /// Free-form quantity, e.g. "200 g"
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

// == Recipe ==
/// A stored recipe.
///
/// The `id` is owned by the store: it is assigned on insert and any value
/// supplied by a client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    /// Cooking steps, in order
    #[serde(default)]
    pub steps: Vec<String>,
    /// Ingredients, in order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Creates an unsaved recipe (id 0) with no steps or ingredients.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            steps: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredients.push(Ingredient::new(name, quantity));
        self
    }

    // == Same Content ==
    /// Compares every field except the id.
    pub fn same_content(&self, other: &Recipe) -> bool {
        self.name == other.name && self.steps == other.steps && self.ingredients == other.ingredients
    }
}
