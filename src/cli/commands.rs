use crate::cli::Commands;
use crate::controller::RecipeController;
use crate::extractor::Extractor;
use crate::render::Renderer;
use crate::search::RecipeFilter;
use crate::utils::validation::validate_recipe_id;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dispatch one CLI command against the controller
pub async fn run<R: Renderer>(
    controller: &mut RecipeController<R>,
    extractor: &dyn Extractor,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Extract { url, save } => extract(controller, extractor, &url, save).await,
        Commands::List => controller.show_browse(),
        Commands::Search {
            query,
            time,
            servings,
        } => {
            let filter = RecipeFilter {
                query: query.unwrap_or_default(),
                time,
                servings,
            };
            controller.set_filter(filter)?;
            controller.show_browse()
        }
        Commands::View { id } => {
            controller.view(validate_recipe_id(&id)?)?;
            Ok(())
        }
        Commands::Delete { id } => delete(controller, validate_recipe_id(&id)?).await,
        Commands::Export { id, output } => {
            export(controller, validate_recipe_id(&id)?, output.as_deref()).await
        }
        Commands::Edit { id } => {
            controller.view(validate_recipe_id(&id)?)?;
            controller.edit_current()
        }
    }
}

/// Extract a recipe, optionally saving it. Ctrl+C cancels a pending extraction.
pub async fn extract<R: Renderer>(
    controller: &mut RecipeController<R>,
    extractor: &dyn Extractor,
    url: &str,
    save: bool,
) -> Result<()> {
    let (ticket, url) = controller.begin_extraction(url)?;

    let result = tokio::select! {
        result = extractor.extract(&url) => Some(result),
        Ok(()) = tokio::signal::ctrl_c() => None,
    };

    let Some(result) = result else {
        controller.close_modal()?;
        println!("Extraction cancelled");
        return Ok(());
    };

    if controller.finish_extraction(ticket, result)?.is_none() {
        return Ok(());
    }

    if save {
        let recipe = controller.save_draft().await?;
        println!("  ID: {}", recipe.id);
    } else {
        controller.close_modal()?;
        println!("\nRun again with --save to keep an extracted recipe");
    }
    Ok(())
}

pub async fn delete<R: Renderer>(controller: &mut RecipeController<R>, id: &str) -> Result<()> {
    if !controller.delete(id).await? {
        println!("No recipe with id {id}");
    }
    Ok(())
}

/// Write the text export to `output_dir` (or the current directory)
pub async fn export<R: Renderer>(
    controller: &RecipeController<R>,
    id: &str,
    output_dir: Option<&Path>,
) -> Result<()> {
    let export = controller.export_text(id)?;

    let path = match output_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await?;
            dir.join(&export.filename)
        }
        None => PathBuf::from(&export.filename),
    };

    tokio::fs::write(&path, export.body).await?;
    info!("Exported recipe {} to {:?}", id, path);
    println!("✓ Exported: {}", path.display());
    Ok(())
}
