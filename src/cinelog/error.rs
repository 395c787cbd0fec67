use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Movie already in catalog: {0}")]
    DuplicateTitle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
