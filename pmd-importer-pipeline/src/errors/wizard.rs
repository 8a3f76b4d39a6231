//! Error types for the import wizard.
//! Every variant terminates the current wizard request with a message shown
//! to the operator; nothing is retried.
use pmd_importer_repository::{InvalidTablePrefix, LegacyRepositoryError};
use thiserror::Error;

use crate::errors::{CacheError, ImporterError};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Missing required setting: {0}")]
    ConfigurationMissing(String),
    #[error("Invalid setting: {0}")]
    InvalidSetting(#[from] InvalidTablePrefix),
    #[error("Unsupported entity type: {0}")]
    UnsupportedEntitySelection(String),
    #[error("Unknown wizard step: {0}")]
    UnknownStep(u8),
    #[error("Could not connect to the legacy database: {0}")]
    Connection(#[source] LegacyRepositoryError),
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Import(#[from] ImporterError),
}
