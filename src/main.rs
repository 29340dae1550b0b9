use clap::Parser;
use recipebox::{
    cli::{commands, Cli, OutputFormat},
    config::Settings,
    db,
    extractor::MockExtractor,
    render::{HtmlRenderer, TextRenderer},
    RecipeController, RecipeStore, Result,
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipebox=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    let backend = db::open_backend(&settings.storage).await?;
    let store = RecipeStore::load(backend, settings.storage.key.clone()).await?;
    info!("Collection loaded: {} recipes", store.len());

    let extractor = MockExtractor::new(Duration::from_millis(settings.extraction.delay_ms))?;

    match cli.format {
        OutputFormat::Text => {
            let mut controller = RecipeController::new(store, TextRenderer::stdout());
            commands::run(&mut controller, &extractor, cli.command).await
        }
        OutputFormat::Html => {
            let mut controller = RecipeController::new(store, HtmlRenderer::new(std::io::stdout()));
            commands::run(&mut controller, &extractor, cli.command).await
        }
    }
}
