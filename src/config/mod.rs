use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(Error::Config(format!(
                "Invalid STORAGE_BACKEND value: {other} (expected memory, file or sqlite)"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
            StorageBackend::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding one JSON file per key (file backend)
    pub dir: PathBuf,
    pub database_url: String,
    /// Key the collection is persisted under
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Artificial latency of the mock extractor
    pub delay_ms: u64,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let backend = std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()?;

        let dir = std::env::var("STORAGE_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/recipebox.db".to_string());

        let key = std::env::var("STORAGE_KEY").unwrap_or_else(|_| "recipes".to_string());

        let delay_ms = std::env::var("EXTRACTION_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid EXTRACTION_DELAY_MS value".to_string()))?;

        Ok(Settings {
            storage: StorageConfig {
                backend,
                dir,
                database_url,
                key,
            },
            extraction: ExtractionConfig { delay_ms },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            return Err(Error::Config("Storage key must not be empty".to_string()));
        }

        if self.storage.backend == StorageBackend::Sqlite
            && !self.storage.database_url.starts_with("sqlite:")
        {
            return Err(Error::Config(
                "DATABASE_URL must be a sqlite: URL for the sqlite backend".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            storage: StorageConfig {
                backend: StorageBackend::File,
                dir: "/tmp/recipebox".into(),
                database_url: "sqlite::memory:".to_string(),
                key: "recipes".to_string(),
            },
            extraction: ExtractionConfig { delay_ms: 0 },
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = sample();
        assert!(settings.validate().is_ok());

        settings.storage.key = "  ".to_string();
        assert!(settings.validate().is_err());

        let mut settings = sample();
        settings.storage.backend = StorageBackend::Sqlite;
        settings.storage.database_url = "postgres://localhost/db".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!("SQLite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("redis".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::File.to_string(), "file");
    }
}
