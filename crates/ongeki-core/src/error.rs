use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog contains no usable songs")]
    CatalogEmpty,
}

pub type Result<T> = std::result::Result<T, Error>;
