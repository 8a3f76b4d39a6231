//! This module defines the `Importer`, which drives one legacy table at a
//! time through the record mapper into the WordPress store.
//!
//! An import fetches the whole table, then for each row checks whether the
//! target already holds it, maps it and inserts it. Rows are written one by
//! one; a failed insert stops the table's import and keeps the rows already
//! written.
use pmd_importer_repository::{LegacyRepository, TargetRepository};
use pmd_importer_shared::types::{EntityKind, ImportReport, LegacyCategory, LegacyListing, LegacyUser};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::ImporterError;
use crate::mapper::{map_category, map_listing, map_user, MapperContext};

/// Copies legacy PMD records into the WordPress store.
pub struct Importer {
    legacy: Arc<dyn LegacyRepository>,
    target: Arc<dyn TargetRepository>,
    context: MapperContext,
}

impl Importer {
    /// Creates a new `Importer`.
    ///
    /// # Arguments
    ///
    /// * `legacy` - Source of the legacy PMD records
    /// * `target` - The WordPress store records are written to
    /// * `context` - Site URL and listing field set used by the mapper
    pub fn new(
        legacy: Arc<dyn LegacyRepository>,
        target: Arc<dyn TargetRepository>,
        context: MapperContext,
    ) -> Self {
        Self {
            legacy,
            target,
            context,
        }
    }

    /// Imports every record of one legacy table.
    ///
    /// # Returns
    ///
    /// An `ImportReport` with the fetched, inserted and skipped counts, or
    /// `ImporterError::EmptySourceTable` when the legacy table has no rows.
    pub async fn import(&self, kind: EntityKind) -> Result<ImportReport, ImporterError> {
        info!(kind = %kind, "Starting import");
        let report = match kind {
            EntityKind::Listing => {
                let listings = self.legacy.fetch_listings().await?;
                self.import_listings(&listings).await?
            }
            EntityKind::Category => {
                let categories = self.legacy.fetch_categories().await?;
                self.import_categories(&categories).await?
            }
            EntityKind::User => {
                let users = self.legacy.fetch_users().await?;
                self.import_users(&users).await?
            }
        };
        info!(
            kind = %kind,
            fetched = report.fetched,
            inserted = report.inserted,
            skipped = report.skipped,
            "Import finished"
        );
        Ok(report)
    }

    /// Imports users, then categories, then listings.
    ///
    /// An empty legacy table is logged and reported with zero counts; any
    /// other error stops the run.
    pub async fn import_all(&self) -> Result<Vec<ImportReport>, ImporterError> {
        let mut reports = Vec::with_capacity(EntityKind::IMPORT_ORDER.len());
        for kind in EntityKind::IMPORT_ORDER {
            reports.push(self.import_allowing_empty(kind).await?);
        }
        Ok(reports)
    }

    /// Like `import`, but an empty legacy table is logged and reported with
    /// zero counts instead of failing.
    pub async fn import_allowing_empty(
        &self,
        kind: EntityKind,
    ) -> Result<ImportReport, ImporterError> {
        match self.import(kind).await {
            Err(ImporterError::EmptySourceTable(kind)) => {
                warn!(kind = %kind, "Legacy table is empty, nothing to import");
                Ok(ImportReport::new(kind, 0))
            }
            result => result,
        }
    }

    /// Drops the legacy table backing `kind`.
    pub async fn remove_legacy_table(&self, kind: EntityKind) -> Result<(), ImporterError> {
        self.legacy.drop_table(kind).await?;
        info!(kind = %kind, table = kind.legacy_table(), "Dropped legacy table");
        Ok(())
    }

    async fn import_listings(
        &self,
        listings: &[LegacyListing],
    ) -> Result<ImportReport, ImporterError> {
        let mut report = non_empty_report(EntityKind::Listing, listings.len())?;
        for listing in listings {
            if listing.id != 0 && self.target.post_exists(listing.id).await? {
                debug!(id = listing.id, "Listing already imported, skipping");
                report.skipped += 1;
                continue;
            }
            let (post, detail) = map_listing(listing, &self.context);
            self.target.insert_listing(&post, &detail).await?;
            report.inserted += 1;
        }
        Ok(report)
    }

    async fn import_categories(
        &self,
        categories: &[LegacyCategory],
    ) -> Result<ImportReport, ImporterError> {
        let mut report = non_empty_report(EntityKind::Category, categories.len())?;
        for category in categories {
            if category.id != 0 && self.target.term_exists(category.id).await? {
                debug!(id = category.id, "Category already imported, skipping");
                report.skipped += 1;
                continue;
            }
            let (term, taxonomy) = map_category(category);
            self.target.insert_category(&term, &taxonomy).await?;
            report.inserted += 1;
        }
        Ok(report)
    }

    async fn import_users(&self, users: &[LegacyUser]) -> Result<ImportReport, ImporterError> {
        let mut report = non_empty_report(EntityKind::User, users.len())?;
        for user in users {
            if !user.user_email.is_empty() && self.target.user_email_exists(&user.user_email).await?
            {
                debug!(id = user.id, email = %user.user_email, "User email already registered, skipping");
                report.skipped += 1;
                continue;
            }
            self.target.insert_user(&map_user(user)).await?;
            report.inserted += 1;
        }
        Ok(report)
    }
}

fn non_empty_report(kind: EntityKind, fetched: usize) -> Result<ImportReport, ImporterError> {
    if fetched == 0 {
        return Err(ImporterError::EmptySourceTable(kind));
    }
    Ok(ImportReport::new(kind, fetched))
}
