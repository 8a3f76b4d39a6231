use pmd_importer_pipeline::cache::InMemoryCache;
use pmd_importer_pipeline::importer::Importer;
use pmd_importer_pipeline::mapper::{ListingFieldSet, MapperContext};
use pmd_importer_pipeline::wizard::ImportWizard;
use pmd_importer_repository::{
    connect_pool, MySqlLegacyConnector, MySqlLegacyRepository, MySqlTargetRepository,
};
use sqlx::mysql::MySqlConnectOptions;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::ImportingError;

/// `Dependencies` holds the stores every command runs against.
///
/// The WordPress store is connected up front. The legacy store is connected
/// only by the commands that read it, since the wizard learns its
/// credentials from the operator.
pub struct Dependencies {
    pub config: AppConfig,
    pub target: Arc<MySqlTargetRepository>,
}

impl Dependencies {
    /// Connects the WordPress store described by `config`.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` once the pool is up, or an
    /// `ImportingError` if the URL, the prefix or the connection is invalid.
    pub async fn new(config: AppConfig) -> Result<Self, ImportingError> {
        let options: MySqlConnectOptions = config.database_url.parse()?;
        let pool = connect_pool(options, config.max_connections).await?;
        let target = MySqlTargetRepository::new(pool, &config.wordpress_table_prefix)?;
        info!(
            table_prefix = %config.wordpress_table_prefix,
            "Connected to WordPress database"
        );

        Ok(Dependencies {
            config,
            target: Arc::new(target),
        })
    }

    pub fn mapper_context(&self, field_set: ListingFieldSet) -> MapperContext {
        MapperContext::new(self.config.site_url.clone(), field_set)
    }

    /// Connects the legacy store and builds an importer over both stores.
    pub async fn importer(&self, field_set: ListingFieldSet) -> Result<Importer, ImportingError> {
        let options: MySqlConnectOptions = self.config.legacy_database_url.parse()?;
        let pool = connect_pool(options, self.config.max_connections).await?;
        let legacy = MySqlLegacyRepository::new(pool, &self.config.legacy_table_prefix)?;
        info!(
            table_prefix = %self.config.legacy_table_prefix,
            "Connected to PhpMyDirectory database"
        );

        Ok(Importer::new(
            Arc::new(legacy),
            self.target.clone(),
            self.mapper_context(field_set),
        ))
    }

    /// Builds the wizard served over HTTP.
    ///
    /// The wizard produces the wizard listing field set.
    pub fn wizard(&self) -> ImportWizard {
        ImportWizard::new(
            Arc::new(InMemoryCache::new()),
            Arc::new(MySqlLegacyConnector::new(self.config.max_connections)),
            self.target.clone(),
            self.mapper_context(ListingFieldSet::Wizard),
        )
    }
}
