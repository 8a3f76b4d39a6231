//! MySQL implementation of the legacy PMD repository.
use async_trait::async_trait;
use pmd_importer_shared::types::{EntityKind, LegacyCategory, LegacyListing, LegacyUser};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySqlPool};
use tracing::{debug, warn};

use crate::config::TablePrefix;
use crate::errors::LegacyRepositoryError;
use crate::interfaces::LegacyRepository;
use crate::mysql::rows::{
    select_as_text, CategoryRow, ListingRow, UserRow, CATEGORY_COLUMNS, LISTING_COLUMNS,
    USER_COLUMNS,
};

/// MySQL-backed reader for the PhpMyDirectory tables.
pub struct MySqlLegacyRepository {
    /// Pool connected to the legacy database
    pool: MySqlPool,
    prefix: TablePrefix,
}

impl MySqlLegacyRepository {
    /// Creates a new legacy repository.
    ///
    /// # Arguments
    ///
    /// * `pool` - Pool connected to the database holding the PMD tables
    /// * `table_prefix` - Prefix of the PMD tables, usually `pmd_`
    ///
    /// # Returns
    ///
    /// * `Ok(MySqlLegacyRepository)` - Ready-to-use repository instance
    /// * `Err(LegacyRepositoryError::InvalidTablePrefix)` - The prefix is not a plain identifier
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Result<Self, LegacyRepositoryError> {
        let prefix = TablePrefix::new(table_prefix)?;
        Ok(Self { pool, prefix })
    }

    fn table(&self, kind: EntityKind) -> String {
        self.prefix.table(kind.legacy_table())
    }

    async fn fetch_rows<R>(
        &self,
        table: &str,
        columns: &[(&str, &str)],
    ) -> Result<Vec<R>, LegacyRepositoryError>
    where
        R: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let sql = select_as_text(table, columns);
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        debug!(table = %table, rows = rows.len(), "Fetched legacy rows");
        Ok(rows)
    }
}

#[async_trait]
impl LegacyRepository for MySqlLegacyRepository {
    async fn fetch_listings(&self) -> Result<Vec<LegacyListing>, LegacyRepositoryError> {
        let table = self.table(EntityKind::Listing);
        self.fetch_rows::<ListingRow>(&table, LISTING_COLUMNS)
            .await?
            .into_iter()
            .map(|row| row.decode(&table))
            .collect()
    }

    async fn fetch_categories(&self) -> Result<Vec<LegacyCategory>, LegacyRepositoryError> {
        let table = self.table(EntityKind::Category);
        self.fetch_rows::<CategoryRow>(&table, CATEGORY_COLUMNS)
            .await?
            .into_iter()
            .map(|row| row.decode(&table))
            .collect()
    }

    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, LegacyRepositoryError> {
        let table = self.table(EntityKind::User);
        self.fetch_rows::<UserRow>(&table, USER_COLUMNS)
            .await?
            .into_iter()
            .map(|row| row.decode(&table))
            .collect()
    }

    async fn drop_table(&self, kind: EntityKind) -> Result<(), LegacyRepositoryError> {
        let table = self.table(kind);
        warn!(table = %table, "Dropping legacy table");
        sqlx::query(&format!("DROP TABLE IF EXISTS `{table}`"))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
