use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Database errors might contain sensitive schema information
            Error::Database(_) => "Database operation failed".to_string(),
            Error::Migration(_) => "Database migration failed".to_string(),

            // Persisted payloads may contain the whole collection
            Error::Json(_) => "Malformed JSON payload".to_string(),
            Error::Yaml(_) => "Malformed YAML payload".to_string(),

            Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("password") || lower.contains("secret") || lower.contains("token")
                {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }

            Error::Io(_) => "File system operation failed".to_string(),
            Error::Template(_) => "Template rendering failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
            Error::Extraction(msg) => format!("Extraction failed: {msg}"),
            Error::Unsupported(msg) => format!("Unsupported: {msg}"),
        }
    }

    /// Whether the failure is worth retrying from the user's side
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Extraction(_) | Error::Io(_) | Error::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_safe_redacts_internal_secrets() {
        let err = Error::Internal("bad token abc123".to_string());
        assert_eq!(err.log_safe(), "Internal error (details redacted)");

        let err = Error::Internal("queue drained".to_string());
        assert_eq!(err.log_safe(), "Internal error: queue drained");
    }

    #[test]
    fn test_transient_classification() {
        assert!(Error::Extraction("timeout".to_string()).is_transient());
        assert!(!Error::Validation("Please enter a valid URL".to_string()).is_transient());
    }
}
