#![allow(dead_code)]

use async_trait::async_trait;
use recipebox::extractor::Extractor;
use recipebox::render::{Notice, Renderer};
use recipebox::{Error, NewRecipe, Platform, Recipe, RecipeContent, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Collection { ids: Vec<String>, total: usize },
    Recipe(String),
    Loading(bool),
    Notice(Notice),
    Count(usize),
}

/// Records every render call
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<Event>,
}

impl RecordingRenderer {
    pub fn last_collection(&self) -> Option<&Vec<String>> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Collection { ids, .. } => Some(ids),
            _ => None,
        })
    }

    pub fn collection_renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Collection { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn render_collection(&mut self, recipes: &[&Recipe], total: usize) -> Result<()> {
        self.events.push(Event::Collection {
            ids: recipes.iter().map(|r| r.id.clone()).collect(),
            total,
        });
        Ok(())
    }

    fn render_recipe(&mut self, recipe: &RecipeContent) -> Result<()> {
        self.events.push(Event::Recipe(recipe.title.clone()));
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        self.events.push(Event::Loading(loading));
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        self.events.push(Event::Notice(notice.clone()));
        Ok(())
    }

    fn render_count(&mut self, count: usize) -> Result<()> {
        self.events.push(Event::Count(count));
        Ok(())
    }
}

pub fn content(title: &str, prep: u32, cook: u32, servings: u32) -> RecipeContent {
    RecipeContent {
        title: title.to_string(),
        description: Some(format!("{title}, the easy way")),
        image: None,
        prep_time: prep,
        cook_time: cook,
        servings,
        difficulty: Some("Easy".to_string()),
        cuisine: None,
        ingredients: vec!["2 cloves garlic".to_string(), "1 tbsp olive oil".to_string()],
        instructions: vec!["Mix".to_string(), "Cook".to_string()],
        source_url: "https://example.com/recipe".to_string(),
        platform: Platform::Website,
        extracted_at: None,
    }
}

pub fn draft(title: &str, prep: u32, cook: u32, servings: u32) -> NewRecipe {
    content(title, prep, cook, servings).into()
}

/// Always returns the same draft
pub struct FixedExtractor(pub NewRecipe);

#[async_trait]
impl Extractor for FixedExtractor {
    async fn extract(&self, url: &Url) -> Result<NewRecipe> {
        let mut draft = self.0.clone();
        draft.content.source_url = url.as_str().to_string();
        draft.content.platform = Platform::detect(url.as_str());
        Ok(draft)
    }
}

/// Always fails
pub struct FailingExtractor;

#[async_trait]
impl Extractor for FailingExtractor {
    async fn extract(&self, _url: &Url) -> Result<NewRecipe> {
        Err(Error::Internal("upstream returned 503".to_string()))
    }
}
