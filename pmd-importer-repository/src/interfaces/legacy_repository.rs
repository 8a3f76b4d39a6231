//! This module defines the `LegacyRepository` trait, the read side of the
//! migration. It abstracts access to the PhpMyDirectory tables.
use crate::errors::LegacyRepositoryError;
use pmd_importer_shared::types::{EntityKind, LegacyCategory, LegacyListing, LegacyUser};

/// A trait that defines the interface for reading the legacy PMD store.
///
/// Every fetch returns the whole table in id order. Rows are already typed;
/// implementors decode and validate them at this boundary.
#[async_trait::async_trait]
pub trait LegacyRepository: Send + Sync {
    /// Fetches every row of the listings table.
    async fn fetch_listings(&self) -> Result<Vec<LegacyListing>, LegacyRepositoryError>;

    /// Fetches every row of the categories table.
    async fn fetch_categories(&self) -> Result<Vec<LegacyCategory>, LegacyRepositoryError>;

    /// Fetches every row of the users table.
    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, LegacyRepositoryError>;

    /// Drops the legacy table backing `kind`.
    ///
    /// Used by the `--removetable` command option once an import is done.
    async fn drop_table(&self, kind: EntityKind) -> Result<(), LegacyRepositoryError>;
}
