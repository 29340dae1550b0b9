// Presentation of recipes: terminal text, HTML pages and plain-text export

pub mod export;
pub mod html;
pub mod text;

use crate::db::models::{Recipe, RecipeContent};
use crate::error::Result;

pub use export::Export;
pub use html::HtmlRenderer;
pub use text::TextRenderer;

pub const NO_DESCRIPTION: &str = "No description available";

/// Transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Receives everything the controller wants shown. Implementations only
/// read what they are given.
pub trait Renderer {
    /// Cards for `recipes`; `total` is the size of the whole collection
    fn render_collection(&mut self, recipes: &[&Recipe], total: usize) -> Result<()>;

    /// Detail view of a draft or saved recipe
    fn render_recipe(&mut self, recipe: &RecipeContent) -> Result<()>;

    fn set_loading(&mut self, loading: bool) -> Result<()>;

    fn notify(&mut self, notice: &Notice) -> Result<()>;

    /// Saved-recipe counter
    fn render_count(&mut self, _count: usize) -> Result<()> {
        Ok(())
    }
}
