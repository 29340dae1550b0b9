// Recipe extraction from URLs.
// Only a mock extractor is provided; real per-platform scrapers plug in
// behind the `Extractor` trait.

use crate::db::models::{NewRecipe, Platform, RecipeContent};
use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const SAMPLE_CATALOG: &str = include_str!("../../config/sample_recipes.yaml");

/// Turns a URL into a draft recipe
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &Url) -> Result<NewRecipe>;
}

/// Recipe fields without provenance, as listed in a catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecipe {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    recipes: Vec<CatalogRecipe>,
}

impl CatalogRecipe {
    fn into_draft(self, url: &Url) -> NewRecipe {
        RecipeContent {
            title: self.title,
            description: self.description,
            image: self.image,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            cuisine: self.cuisine,
            ingredients: self.ingredients,
            instructions: self.instructions,
            source_url: url.as_str().to_string(),
            platform: Platform::detect(url.as_str()),
            extracted_at: Some(Utc::now()),
        }
        .into()
    }
}

/// Picks a random catalog recipe after an artificial delay
#[derive(Debug, Clone)]
pub struct MockExtractor {
    catalog: Vec<CatalogRecipe>,
    delay: Duration,
}

impl MockExtractor {
    /// Mock extractor over the bundled sample recipes
    pub fn new(delay: Duration) -> Result<Self> {
        Self::from_yaml(SAMPLE_CATALOG, delay)
    }

    /// Parse a catalog of the form `recipes: [...]`
    pub fn from_yaml(yaml: &str, delay: Duration) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        Ok(Self::with_catalog(catalog.recipes, delay))
    }

    pub fn with_catalog(catalog: Vec<CatalogRecipe>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    pub fn catalog(&self) -> &[CatalogRecipe] {
        &self.catalog
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, url: &Url) -> Result<NewRecipe> {
        debug!("Mock extraction of {} ({}ms delay)", url, self.delay.as_millis());
        tokio::time::sleep(self.delay).await;

        let picked = {
            let mut rng = rand::thread_rng();
            self.catalog.choose(&mut rng).cloned()
        };

        let recipe = picked
            .ok_or_else(|| Error::Extraction("No sample recipes available".to_string()))?;
        info!("Extracted '{}' from {}", recipe.title, url);
        Ok(recipe.into_draft(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let extractor = MockExtractor::new(Duration::ZERO).unwrap();
        let titles: Vec<&str> = extractor
            .catalog()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Creamy Garlic Pasta",
                "Chocolate Chip Cookies",
                "Asian Stir-Fry Vegetables"
            ]
        );
        assert_eq!(extractor.catalog()[1].servings, 24);
    }

    #[tokio::test]
    async fn test_mock_extract_sets_provenance() {
        let extractor = MockExtractor::new(Duration::ZERO).unwrap();
        let url = Url::parse("https://www.pinterest.com/pin/123").unwrap();

        let draft = extractor.extract(&url).await.unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.content.platform, Platform::Pinterest);
        assert_eq!(draft.content.source_url, "https://www.pinterest.com/pin/123");
        assert!(draft.content.extracted_at.is_some());
        assert!(extractor
            .catalog()
            .iter()
            .any(|r| r.title == draft.content.title));
    }

    #[tokio::test]
    async fn test_empty_catalog_fails() {
        let extractor = MockExtractor::with_catalog(Vec::new(), Duration::ZERO);
        let url = Url::parse("https://example.com").unwrap();

        assert!(matches!(
            extractor.extract(&url).await,
            Err(Error::Extraction(_))
        ));
    }

    #[test]
    fn test_malformed_catalog_is_rejected() {
        assert!(MockExtractor::from_yaml("recipes: [{title: 1}]", Duration::ZERO).is_err());
    }
}
