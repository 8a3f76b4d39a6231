//! This module defines the `TargetRepository` trait, the write side of the
//! migration. It abstracts the WordPress core tables and the GeoDirectory
//! place detail table.
use crate::errors::TargetRepositoryError;
use pmd_importer_shared::types::{PlaceDetail, Post, Term, TermTaxonomy, User};

/// A trait that defines the interface for writing the WordPress store.
///
/// The existence checks back the importer's skip-if-exists rule. Inserts never
/// overwrite: there is no update path.
#[async_trait::async_trait]
pub trait TargetRepository: Send + Sync {
    /// Returns whether a post with this id already exists.
    async fn post_exists(&self, id: u64) -> Result<bool, TargetRepositoryError>;

    /// Returns whether a term with this id already exists.
    async fn term_exists(&self, term_id: u64) -> Result<bool, TargetRepositoryError>;

    /// Returns whether a user with this email already exists.
    async fn user_email_exists(&self, email: &str) -> Result<bool, TargetRepositoryError>;

    /// Inserts a listing's post row and its place detail row.
    ///
    /// # Arguments
    ///
    /// * `post` - The `posts` row, carrying the legacy listing id.
    /// * `detail` - The `geodir_gd_place_detail` row keyed by the same id.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `TargetRepositoryError` if either insert fails.
    async fn insert_listing(
        &self,
        post: &Post,
        detail: &PlaceDetail,
    ) -> Result<(), TargetRepositoryError>;

    /// Inserts a category's term row and its taxonomy row.
    async fn insert_category(
        &self,
        term: &Term,
        taxonomy: &TermTaxonomy,
    ) -> Result<(), TargetRepositoryError>;

    /// Inserts a user row and, when requested, the password-reset flags.
    async fn insert_user(&self, user: &User) -> Result<(), TargetRepositoryError>;
}
