use rentora_catalog::ListingError;

use crate::backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid listing: {0}")]
    InvalidListing(#[from] ListingError),

    #[error("Failed to serialize listings: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Stored listings under '{key}' are unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Listing identifiers exhausted")]
    IdSpaceExhausted,
}

pub type StoreResult<T> = Result<T, StoreError>;
