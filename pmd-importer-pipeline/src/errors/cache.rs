//! Error types for the transient cache.
use thiserror::Error;

/// Represents errors that can occur while reading or writing cached values.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cached value could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}
