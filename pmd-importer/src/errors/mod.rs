//! Error types for the PMD Importer application.
//! Consolidates the errors of every stage, from reading the configuration to
//! running an import, into the one type `main` reports to the operator.
use pmd_importer_pipeline::errors::{ImporterError, WizardError};
use pmd_importer_repository::{LegacyRepositoryError, TargetRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ImportingError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Legacy repository error: {0}")]
    LegacyRepository(#[from] LegacyRepositoryError),
    #[error("Target repository error: {0}")]
    TargetRepository(#[from] TargetRepositoryError),
    #[error("Import failed: {0}")]
    Importer(#[from] ImporterError),
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),
    #[error("Server error: {0}")]
    Server(String),
}
