// Collection search: case-insensitive text match plus facet buckets

pub mod facets;

use crate::db::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use facets::{ServingsBucket, TimeBucket};

/// Active search text and facets. All set predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub time: Option<TimeBucket>,
    #[serde(default)]
    pub servings: Option<ServingsBucket>,
}

impl RecipeFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: TimeBucket) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_servings(mut self, servings: ServingsBucket) -> Self {
        self.servings = Some(servings);
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.time.is_none() && self.servings.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let needle = self.query.trim().to_lowercase();
        self.matches_with(recipe, &needle)
    }

    fn matches_with(&self, recipe: &Recipe, needle: &str) -> bool {
        if !needle.is_empty() && !matches_text(recipe, needle) {
            return false;
        }

        if let Some(time) = self.time {
            if !time.contains(recipe.total_time()) {
                return false;
            }
        }

        if let Some(servings) = self.servings {
            if !servings.contains(recipe.content.servings) {
                return false;
            }
        }

        true
    }
}

/// Substring match on title, description or any ingredient. `needle` is lowercase.
fn matches_text(recipe: &Recipe, needle: &str) -> bool {
    let content = &recipe.content;
    content.title.to_lowercase().contains(needle)
        || content
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || content
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
}

/// Recipes matching `filter`, in collection order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    let needle = filter.query.trim().to_lowercase();
    let results: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| filter.matches_with(r, &needle))
        .collect();

    debug!(
        "Filter {:?} matched {} of {} recipes",
        filter,
        results.len(),
        recipes.len()
    );
    results
}
