use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate meme id: {0}")]
    DuplicateId(String),

    #[error("meme {id} has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    #[error("meme {id} has popularity {value}, expected 0..=100")]
    PopularityOutOfRange { id: String, value: u32 },

    #[error("meme {id} has trend rank 0, expected a positive rank")]
    InvalidTrendRank { id: String },

    #[error("meme not found: {0}")]
    NotFound(String),

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
