// Validation utilities
use crate::error::{Error, Result};
use tracing::warn;
use url::Url;

/// Message shown for any URL the user cannot submit
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Validate a user-submitted recipe URL. Only absolute http(s) URLs with a
/// host are accepted; surrounding whitespace is ignored.
pub fn validate_source_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(INVALID_URL_MESSAGE.to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| {
        warn!("Rejected recipe URL {:?}: {}", trimmed, e);
        Error::Validation(INVALID_URL_MESSAGE.to_string())
    })?;

    if !is_web(&url) {
        warn!("Rejected recipe URL {:?}: unsupported scheme {}", trimmed, url.scheme());
        return Err(Error::Validation(INVALID_URL_MESSAGE.to_string()));
    }

    Ok(url)
}

/// Whether a stored link is safe to emit as an `href` or `src`
pub fn is_web_url(input: &str) -> bool {
    Url::parse(input.trim()).map(|url| is_web(&url)).unwrap_or(false)
}

fn is_web(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}

/// Validate a recipe id supplied from outside (CLI arguments)
pub fn validate_recipe_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::Validation("Recipe id must not be empty".to_string()));
    }
    Ok(id)
}
