//! # PMD Importer Repository
//! This crate provides traits and implementations for reading the legacy
//! PhpMyDirectory tables and writing the WordPress and GeoDirectory tables.
//! It includes definitions for errors, interfaces, connection settings, and
//! concrete implementations for MySQL.
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mysql;

pub use config::{ConnectionSettings, InvalidTablePrefix, TablePrefix};
pub use errors::{LegacyRepositoryError, TargetRepositoryError};
pub use interfaces::{LegacyConnector, LegacyRepository, TargetRepository};
pub use mysql::{connect_pool, MySqlLegacyConnector, MySqlLegacyRepository, MySqlTargetRepository};
