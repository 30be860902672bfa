use sigforge_schema::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Signature not found: {0}")]
    NotFound(Uuid),

    #[error("Signature already exists: {0}")]
    DuplicateId(Uuid),

    #[error("Invalid signature: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Import text that is not JSON at all.
    #[error("Failed to parse file.")]
    Parse(#[source] serde_json::Error),

    /// JSON that does not hold a `signatures` array of valid records.
    #[error("Invalid file format.")]
    InvalidFormat,
}
