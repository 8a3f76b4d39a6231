use thiserror::Error;

use crate::config::InvalidTablePrefix;

/// Represents errors that can occur while writing the WordPress store.
#[derive(Debug, Error)]
pub enum TargetRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error(transparent)]
    InvalidTablePrefix(#[from] InvalidTablePrefix),
}
