pub mod config;
pub mod db;
pub mod error;

// Query engine over the saved collection
pub mod search;

// Extraction and lifecycle
pub mod controller;
pub mod extractor;

// Presentation
pub mod render;

// Command-line front-end
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use controller::RecipeController;
pub use db::models::{NewRecipe, Platform, Recipe, RecipeContent};
pub use db::RecipeStore;
pub use error::{Error, Result};
pub use search::{filter_recipes, RecipeFilter, ServingsBucket, TimeBucket};
