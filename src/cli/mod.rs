// Command-line interface

pub mod commands;

use crate::search::{ServingsBucket, TimeBucket};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox")]
#[command(about = "Recipe Box - save, search and filter extracted recipes", long_about = None)]
pub struct Cli {
    /// Output format for recipe views
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a recipe from a URL
    Extract {
        /// Recipe page URL
        url: String,

        /// Save the extracted recipe
        #[arg(long)]
        save: bool,
    },

    /// List saved recipes
    List,

    /// Search saved recipes
    Search {
        /// Text matched against title, description and ingredients
        query: Option<String>,

        /// Total time bucket
        #[arg(long, value_enum)]
        time: Option<TimeBucket>,

        /// Servings bucket
        #[arg(long, value_enum)]
        servings: Option<ServingsBucket>,
    },

    /// Show a saved recipe
    View {
        /// Recipe ID
        id: String,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe ID
        id: String,
    },

    /// Export a saved recipe as plain text
    Export {
        /// Recipe ID
        id: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Edit a saved recipe (not available yet)
    Edit {
        /// Recipe ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_facets() {
        let cli = Cli::parse_from([
            "recipebox", "search", "pasta", "--time", "medium", "--servings", "5+",
        ]);
        match cli.command {
            Commands::Search {
                query,
                time,
                servings,
            } => {
                assert_eq!(query.as_deref(), Some("pasta"));
                assert_eq!(time, Some(TimeBucket::Medium));
                assert_eq!(servings, Some(ServingsBucket::FivePlus));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_rejects_unknown_bucket() {
        assert!(Cli::try_parse_from(["recipebox", "search", "--servings", "6+"]).is_err());
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["recipebox", "view", "abc", "--format", "html"]);
        assert_eq!(cli.format, OutputFormat::Html);
    }
}
