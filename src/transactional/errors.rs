use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Database operation failed: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("No configuration locations were supplied")]
    NoLocations,

    #[error("Unsupported resource location: {0}")]
    UnsupportedLocation(String),

    #[error("Configuration resource {location} not found at {}", path.display())]
    ResourceNotFound { location: String, path: PathBuf },

    #[error("Invalid configuration in {location}: {source}")]
    InvalidConfig {
        location: String,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;
