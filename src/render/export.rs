use crate::db::models::Recipe;
use crate::render::NO_DESCRIPTION;
use crate::utils::sanitize::sanitize_filename;
use std::fmt::Write;

/// A rendered export ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub body: String,
}

/// Plain-text export of a saved recipe
pub fn to_text(recipe: &Recipe) -> Export {
    let content = &recipe.content;
    let mut body = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(body, "{}\n", content.title);
    let _ = writeln!(
        body,
        "Description: {}",
        content.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );
    let _ = writeln!(body, "Prep Time: {} minutes", content.prep_time);
    let _ = writeln!(body, "Cook Time: {} minutes", content.cook_time);
    let _ = writeln!(body, "Servings: {}", content.servings);
    let _ = writeln!(
        body,
        "Difficulty: {}",
        content.difficulty.as_deref().unwrap_or("Unknown")
    );

    let _ = writeln!(body, "\nIngredients:");
    for ingredient in &content.ingredients {
        let _ = writeln!(body, "• {ingredient}");
    }

    let _ = writeln!(body, "\nInstructions:");
    for (index, step) in content.instructions.iter().enumerate() {
        let _ = writeln!(body, "{}. {}", index + 1, step);
    }

    let _ = write!(body, "\nSource: {}", content.source_url);

    Export {
        filename: format!("{}.txt", sanitize_filename(&content.title)),
        body,
    }
}
