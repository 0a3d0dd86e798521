//! Store Module
//!
//! Provides the in-memory recipe collection and the recipe model.

mod recipe;
mod recipe_store;


// Re-export public types
pub use recipe::{Ingredient, Recipe};
pub use recipe_store::{RecipeStore, Snapshot};
