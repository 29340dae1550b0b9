use crate::db::models::{Recipe, RecipeContent};
use crate::error::Result;
use crate::render::{Notice, Renderer, NO_DESCRIPTION};
use crate::utils::sanitize::truncate;
use std::io::Write;

const DESCRIPTION_WIDTH: usize = 80;

/// Plain-text renderer for terminals
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_collection(&mut self, recipes: &[&Recipe], total: usize) -> Result<()> {
        if recipes.is_empty() {
            if total == 0 {
                writeln!(self.out, "No recipes yet")?;
                writeln!(
                    self.out,
                    "Start by extracting your first recipe from a URL"
                )?;
            } else {
                writeln!(self.out, "No recipes found")?;
                writeln!(self.out, "Try adjusting your search or filters")?;
            }
            return Ok(());
        }

        for recipe in recipes {
            let content = &recipe.content;
            writeln!(self.out, "[{}] {}", recipe.id, content.title)?;
            writeln!(
                self.out,
                "    {}m · serves {} · {}",
                content.total_time(),
                content.servings,
                content.platform
            )?;
            let description = content.description.as_deref().unwrap_or(NO_DESCRIPTION);
            writeln!(self.out, "    {}", truncate(description, DESCRIPTION_WIDTH))?;
        }
        writeln!(self.out, "\n{} of {} recipes", recipes.len(), total)?;
        Ok(())
    }

    fn render_recipe(&mut self, recipe: &RecipeContent) -> Result<()> {
        writeln!(self.out, "{}", recipe.title)?;
        writeln!(
            self.out,
            "Extracted from {} ({})",
            recipe.platform, recipe.source_url
        )?;
        writeln!(
            self.out,
            "Total Time: {} min | Cook Time: {} min | Servings: {} | Difficulty: {}",
            recipe.total_time(),
            recipe.cook_time,
            recipe.servings,
            recipe.difficulty.as_deref().unwrap_or("Unknown")
        )?;
        writeln!(
            self.out,
            "\n{}",
            recipe.description.as_deref().unwrap_or(NO_DESCRIPTION)
        )?;

        writeln!(self.out, "\nIngredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(self.out, "  • {ingredient}")?;
        }

        writeln!(self.out, "\nInstructions:")?;
        for (index, step) in recipe.instructions.iter().enumerate() {
            writeln!(self.out, "  {}. {}", index + 1, step)?;
        }
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        if loading {
            writeln!(self.out, "Extracting recipe...")?;
        }
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        match notice {
            Notice::Success(msg) => writeln!(self.out, "✓ {msg}")?,
            Notice::Error(msg) => writeln!(self.out, "✗ {msg}")?,
        }
        Ok(())
    }

    fn render_count(&mut self, count: usize) -> Result<()> {
        writeln!(self.out, "Recipes saved: {count}")?;
        Ok(())
    }
}
