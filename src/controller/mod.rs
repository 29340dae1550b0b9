// Recipe lifecycle: view modes, the recipe modal and the in-flight extraction

use crate::db::models::{NewRecipe, Recipe};
use crate::db::RecipeStore;
use crate::error::{Error, Result};
use crate::extractor::Extractor;
use crate::render::{export, Export, Notice, Renderer};
use crate::search::{filter_recipes, RecipeFilter, ServingsBucket, TimeBucket};
use crate::utils::validation::validate_source_url;
use tracing::{debug, info, warn};
use url::Url;

pub const BROWSE_FRAGMENT: &str = "#my-recipes";
pub const EDIT_PLACEHOLDER: &str =
    "Recipe editing feature coming soon! You can delete and re-extract for now.";
const EXTRACTION_FAILED: &str = "Failed to extract recipe. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// URL entry
    Home,
    /// Saved collection with search and filters
    Browse,
}

/// Identifies one extraction request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Closed,
    Loading(ExtractionTicket),
    Draft(NewRecipe),
    /// Read-only view of a saved recipe
    Existing(String),
}

/// Drives the store, the query engine and the renderer from user actions.
///
/// Owned by a single task; every operation runs to completion before the
/// next. Extraction is split into `begin_extraction` / `finish_extraction`
/// so that a result arriving after the modal was closed can be dropped.
pub struct RecipeController<R: Renderer> {
    store: RecipeStore,
    renderer: R,
    view: ViewMode,
    modal: Modal,
    filter: RecipeFilter,
    visible: Vec<String>,
    next_ticket: u64,
}

impl<R: Renderer> RecipeController<R> {
    pub fn new(store: RecipeStore, renderer: R) -> Self {
        let visible = store.all().iter().map(|r| r.id.clone()).collect();
        Self {
            store,
            renderer,
            view: ViewMode::Home,
            modal: Modal::Closed,
            filter: RecipeFilter::default(),
            visible,
            next_ticket: 0,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn recipe_count(&self) -> usize {
        self.store.len()
    }

    /// The draft currently shown, if any
    pub fn draft(&self) -> Option<&NewRecipe> {
        match &self.modal {
            Modal::Draft(draft) => Some(draft),
            _ => None,
        }
    }

    /// Result of the last query run, in collection order
    pub fn visible(&self) -> Vec<&Recipe> {
        self.visible
            .iter()
            .filter_map(|id| self.store.get(id))
            .collect()
    }

    pub fn show_home(&mut self) -> Result<()> {
        self.view = ViewMode::Home;
        Ok(())
    }

    pub fn show_browse(&mut self) -> Result<()> {
        self.view = ViewMode::Browse;
        self.refresh()
    }

    /// Switch view from a location fragment such as `#my-recipes`
    pub fn navigate(&mut self, fragment: &str) -> Result<()> {
        if fragment == BROWSE_FRAGMENT {
            self.show_browse()
        } else {
            self.show_home()
        }
    }

    /// Validate `url` and open the loading modal. Nothing changes on error.
    pub fn begin_extraction(&mut self, url: &str) -> Result<(ExtractionTicket, Url)> {
        let url = match validate_source_url(url) {
            Ok(url) => url,
            Err(e) => {
                if let Error::Validation(msg) = &e {
                    self.renderer.notify(&Notice::Error(msg.clone()))?;
                }
                return Err(e);
            }
        };

        self.next_ticket += 1;
        let ticket = ExtractionTicket(self.next_ticket);
        self.modal = Modal::Loading(ticket);
        self.renderer.set_loading(true)?;

        debug!("Extraction {:?} started for {}", ticket, url);
        Ok((ticket, url))
    }

    /// Apply an extractor result. Results for a ticket that is no longer in
    /// flight are discarded and yield `Ok(None)`.
    pub fn finish_extraction(
        &mut self,
        ticket: ExtractionTicket,
        result: Result<NewRecipe>,
    ) -> Result<Option<&NewRecipe>> {
        if self.modal != Modal::Loading(ticket) {
            debug!("Discarding result of cancelled extraction {:?}", ticket);
            return Ok(None);
        }

        self.renderer.set_loading(false)?;

        match result {
            Ok(draft) => {
                self.renderer.render_recipe(&draft.content)?;
                self.modal = Modal::Draft(draft);
                Ok(self.draft())
            }
            Err(e) => {
                warn!("Recipe extraction error: {}", e.log_safe());
                self.modal = Modal::Closed;
                self.renderer
                    .notify(&Notice::Error(EXTRACTION_FAILED.to_string()))?;
                Err(match e {
                    Error::Extraction(msg) => Error::Extraction(msg),
                    other => Error::Extraction(other.to_string()),
                })
            }
        }
    }

    /// Run a whole extraction against `extractor`
    pub async fn extract(
        &mut self,
        extractor: &dyn Extractor,
        url: &str,
    ) -> Result<Option<&NewRecipe>> {
        let (ticket, url) = self.begin_extraction(url)?;
        let result = extractor.extract(&url).await;
        self.finish_extraction(ticket, result)
    }

    /// Close the modal, cancelling any in-flight extraction
    pub fn close_modal(&mut self) -> Result<()> {
        if let Modal::Loading(ticket) = self.modal {
            debug!("Extraction {:?} cancelled", ticket);
            self.renderer.set_loading(false)?;
        }
        self.modal = Modal::Closed;
        Ok(())
    }

    /// Persist the draft shown in the modal
    pub async fn save_draft(&mut self) -> Result<Recipe> {
        let draft = match std::mem::replace(&mut self.modal, Modal::Closed) {
            Modal::Draft(draft) => draft,
            other => {
                self.modal = other;
                return Err(Error::Validation("No extracted recipe to save".to_string()));
            }
        };

        let saved = match self.store.append(draft.clone()).await {
            Ok(recipe) => recipe.clone(),
            Err(e) => {
                self.modal = Modal::Draft(draft);
                self.renderer
                    .notify(&Notice::Error("Failed to save recipe".to_string()))?;
                return Err(e);
            }
        };

        self.renderer
            .notify(&Notice::Success("Recipe saved successfully!".to_string()))?;
        self.renderer.render_count(self.store.len())?;
        self.refresh()?;

        Ok(saved)
    }

    /// Show a saved recipe read-only
    pub fn view(&mut self, id: &str) -> Result<&Recipe> {
        let Some(recipe) = self.store.get(id) else {
            return Err(Error::NotFound(format!("Recipe {id} not found")));
        };
        self.renderer.render_recipe(&recipe.content)?;
        self.modal = Modal::Existing(id.to_string());

        self.store
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))
    }

    /// Delete a saved recipe. Unknown ids are ignored.
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.store.remove(id).await?;

        if removed {
            if matches!(&self.modal, Modal::Existing(open) if open == id) {
                self.modal = Modal::Closed;
            }
            self.renderer
                .notify(&Notice::Success("Recipe deleted successfully!".to_string()))?;
            self.renderer.render_count(self.store.len())?;
        }

        self.refresh()?;
        Ok(removed)
    }

    /// Placeholder: editing is not available
    pub fn edit_current(&mut self) -> Result<()> {
        self.renderer
            .notify(&Notice::Error(EDIT_PLACEHOLDER.to_string()))?;
        Err(Error::Unsupported(EDIT_PLACEHOLDER.to_string()))
    }

    pub fn search(&mut self, query: &str) -> Result<()> {
        self.filter.query = query.to_string();
        self.refresh()
    }

    pub fn set_time_facet(&mut self, time: Option<TimeBucket>) -> Result<()> {
        self.filter.time = time;
        self.refresh()
    }

    pub fn set_servings_facet(&mut self, servings: Option<ServingsBucket>) -> Result<()> {
        self.filter.servings = servings;
        self.refresh()
    }

    pub fn set_filter(&mut self, filter: RecipeFilter) -> Result<()> {
        self.filter = filter;
        self.refresh()
    }

    /// Plain-text export of a saved recipe
    pub fn export_text(&self, id: &str) -> Result<Export> {
        let recipe = self
            .store
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;
        info!("Exporting recipe {} as text", id);
        Ok(export::to_text(recipe))
    }

    /// Re-run the query; re-render when browsing
    fn refresh(&mut self) -> Result<()> {
        let results = filter_recipes(self.store.all(), &self.filter);
        self.visible = results.iter().map(|r| r.id.clone()).collect();

        if self.view == ViewMode::Browse {
            self.renderer
                .render_collection(&results, self.store.len())?;
        }
        Ok(())
    }
}
