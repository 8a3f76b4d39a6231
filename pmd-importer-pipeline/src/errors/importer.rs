//! Error types for the importer module of the PMD Importer Pipeline.
//! Defines the errors that terminate the import of one legacy table.
use pmd_importer_repository::{LegacyRepositoryError, TargetRepositoryError};
use pmd_importer_shared::types::EntityKind;
use thiserror::Error;

/// Represents errors that can occur while importing a legacy table.
///
/// Records already present in the target store are not errors; they are
/// counted as skipped in the `ImportReport`.
#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("No {0} records found in the legacy table")]
    EmptySourceTable(EntityKind),
    #[error("Legacy repository error: {0}")]
    LegacyRepository(#[from] LegacyRepositoryError),
    #[error("Target repository error: {0}")]
    TargetRepository(#[from] TargetRepositoryError),
}
