//! Recipe Store Module
//!
//! In-memory recipe collection keyed by store-assigned ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};
use crate::store::Recipe;

// == Snapshot ==
/// Serializable image of the store, used for the data file and imports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub recipes: BTreeMap<u64, Recipe>,
}

// == Recipe Store ==
/// Keyed recipe collection.
///
/// Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: BTreeMap<u64, Recipe>,
    next_id: u64,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            recipes: BTreeMap::new(),
            next_id: 1,
        }
    }

    // == Add ==
    /// Stores a new recipe and returns the id assigned to it.
    ///
    /// Fails without storing anything once the id counter cannot advance.
    pub fn add(&mut self, mut recipe: Recipe) -> Result<u64> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RecipeError::IdsExhausted)?;
        recipe.id = id;
        self.recipes.insert(id, recipe);
        Ok(id)
    }

    // == Get ==
    pub fn get(&self, id: u64) -> Result<&Recipe> {
        self.recipes.get(&id).ok_or(RecipeError::NotFound(id))
    }

    // == List ==
    /// Returns all recipes in ascending id order.
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    // == Update ==
    /// Replaces every non-id field of the recipe stored under `id`.
    pub fn update(&mut self, id: u64, mut recipe: Recipe) -> Result<Recipe> {
        let slot = self.recipes.get_mut(&id).ok_or(RecipeError::NotFound(id))?;
        recipe.id = id;
        *slot = recipe;
        Ok(slot.clone())
    }

    // == Delete ==
    /// Removes the recipe stored under `id`, returning whether it existed.
    pub fn delete(&mut self, id: u64) -> bool {
        self.recipes.remove(&id).is_some()
    }

    // == Snapshot ==
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            next_id: self.next_id,
            recipes: self.recipes.clone(),
        }
    }

    // == Restore ==
    /// Replaces the whole collection with the snapshot contents.
    ///
    /// Map keys win over any id inside a recipe body, and the counter is
    /// raised past the highest restored id. A snapshot that would leave the
    /// counter unable to hand out another id is rejected and the store is
    /// left untouched.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let floor = match snapshot.recipes.keys().next_back() {
            Some(&max) => max.checked_add(1).ok_or_else(|| {
                RecipeError::InvalidRequest(format!("Recipe id {} is out of range", max))
            })?,
            None => 1,
        };
        let next_id = snapshot.next_id.max(floor);
        if next_id == u64::MAX {
            return Err(RecipeError::InvalidRequest(format!(
                "Next recipe id {} is out of range",
                next_id
            )));
        }

        self.recipes = snapshot
            .recipes
            .into_iter()
            .map(|(id, mut recipe)| {
                recipe.id = id;
                (id, recipe)
            })
            .collect();
        self.next_id = next_id;
        Ok(())
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
