//! Error types for the importer repositories.
//! Consolidates and re-exports error types related to legacy and target store operations.
mod legacy_repository;
mod target_repository;

pub use legacy_repository::LegacyRepositoryError;
pub use target_repository::TargetRepositoryError;
