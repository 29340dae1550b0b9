use crate::db::models::{NewRecipe, Recipe};
use crate::db::KeyValueStore;
use crate::error::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The saved collection, mirrored to a key-value backend after every mutation
pub struct RecipeStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Load the collection stored under `key`.
    ///
    /// Absent or malformed data yields an empty collection. Only backend
    /// failures are returned as errors.
    pub async fn load(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let recipes = match backend.get(&key).await? {
            Some(raw) => decode_collection(&raw),
            None => {
                debug!("No stored collection under '{}'", key);
                Vec::new()
            }
        };

        info!("Loaded {} recipes", recipes.len());
        Ok(Self {
            backend,
            key,
            recipes,
        })
    }

    /// Recipes in insertion order
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Append a draft, assigning an id and save time when it has none
    pub async fn append(&mut self, draft: NewRecipe) -> Result<&Recipe> {
        let id = match draft.id {
            Some(id) if !id.is_empty() && self.get(&id).is_none() => id,
            Some(id) => {
                if !id.is_empty() {
                    warn!("Recipe id {} already in use, assigning a new one", id);
                }
                Uuid::new_v4().to_string()
            }
            None => Uuid::new_v4().to_string(),
        };

        let recipe = Recipe {
            id,
            content: draft.content,
            saved_at: draft.saved_at.unwrap_or_else(Utc::now),
        };

        self.recipes.push(recipe);
        if let Err(e) = self.persist().await {
            self.recipes.pop();
            return Err(e);
        }

        let saved = &self.recipes[self.recipes.len() - 1];
        info!("Saved recipe {} ({})", saved.id, saved.title());
        Ok(saved)
    }

    /// Remove the recipe with `id`. Returns whether anything was removed.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let position = self.recipes.iter().position(|r| r.id == id);
        let removed = position.map(|index| (index, self.recipes.remove(index)));

        if let Err(e) = self.persist().await {
            if let Some((index, recipe)) = removed {
                self.recipes.insert(index, recipe);
            }
            return Err(e);
        }

        match &removed {
            Some((_, recipe)) => info!("Deleted recipe {} ({})", recipe.id, recipe.title()),
            None => debug!("Delete of unknown recipe {} ignored", id),
        }
        Ok(removed.is_some())
    }

    async fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.recipes)?;
        self.backend.set(&self.key, &json).await
    }
}

/// Decode a persisted collection, treating malformed data as empty and
/// keeping only the first recipe for each id
pub fn decode_collection(raw: &str) -> Vec<Recipe> {
    let recipes: Vec<Recipe> = match serde_json::from_str(raw) {
        Ok(recipes) => recipes,
        Err(e) => {
            warn!("Stored collection is malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = recipes.len();
    let unique: Vec<Recipe> = recipes
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(
            "Dropped {} recipes with duplicate ids",
            total - unique.len()
        );
    }
    unique
}
