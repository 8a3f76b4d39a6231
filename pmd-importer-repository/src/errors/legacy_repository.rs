use thiserror::Error;

use crate::config::InvalidTablePrefix;

/// Represents errors that can occur while reading the legacy PMD store.
///
/// Rows are validated once when they are decoded; a row that cannot be typed
/// is reported as `InvalidRow` with the table it came from.
#[derive(Debug, Error)]
pub enum LegacyRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid row in {table}: {reason}")]
    InvalidRow { table: String, reason: String },

    #[error(transparent)]
    InvalidTablePrefix(#[from] InvalidTablePrefix),
}
