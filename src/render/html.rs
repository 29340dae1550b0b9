use askama::Template;
use std::io::Write;

use crate::db::models::{Recipe, RecipeContent};
use crate::error::Result;
use crate::render::{Notice, Renderer};
use crate::utils::validation::is_web_url;

/// Recipe detail page template. Links are only emitted for http(s) URLs;
/// stored data may predate validation or come from a hand-edited file.
#[derive(Template)]
#[template(path = "recipe.html")]
struct RecipeTemplate<'a> {
    recipe: &'a RecipeContent,
    source_href: Option<&'a str>,
    image_src: Option<&'a str>,
}

/// Recipe card grid template
#[derive(Template)]
#[template(path = "collection.html")]
struct CollectionTemplate<'a> {
    recipes: &'a [&'a Recipe],
    total: usize,
}

/// Writes HTML fragments, one per render call
pub struct HtmlRenderer<W: Write> {
    out: W,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render the detail page of a single recipe
pub fn recipe_page(recipe: &RecipeContent) -> Result<String> {
    let source_href = Some(recipe.source_url.as_str()).filter(|url| is_web_url(url));
    let image_src = recipe.image.as_deref().filter(|url| is_web_url(url));

    Ok(RecipeTemplate {
        recipe,
        source_href,
        image_src,
    }
    .render()?)
}

/// Render the card grid for a filtered collection
pub fn collection_page(recipes: &[&Recipe], total: usize) -> Result<String> {
    Ok(CollectionTemplate { recipes, total }.render()?)
}

impl<W: Write> Renderer for HtmlRenderer<W> {
    fn render_collection(&mut self, recipes: &[&Recipe], total: usize) -> Result<()> {
        let html = collection_page(recipes, total)?;
        self.out.write_all(html.as_bytes())?;
        Ok(())
    }

    fn render_recipe(&mut self, recipe: &RecipeContent) -> Result<()> {
        let html = recipe_page(recipe)?;
        self.out.write_all(html.as_bytes())?;
        Ok(())
    }

    fn set_loading(&mut self, _loading: bool) -> Result<()> {
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        // Notices are terminal-only
        match notice {
            Notice::Success(msg) => tracing::info!("{}", msg),
            Notice::Error(msg) => tracing::warn!("{}", msg),
        }
        Ok(())
    }
}
