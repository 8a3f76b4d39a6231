//! This module defines and re-exports the interfaces for the importer stores.
//! It serves as a central point for accessing traits related to data interaction.
mod legacy_connector;
mod legacy_repository;
mod target_repository;

pub use legacy_connector::LegacyConnector;
pub use legacy_repository::LegacyRepository;
pub use target_repository::TargetRepository;
