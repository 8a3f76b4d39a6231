use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::ConnectionSettings;
use crate::errors::LegacyRepositoryError;
use crate::interfaces::{LegacyConnector, LegacyRepository};
use crate::mysql::{connect_pool, MySqlLegacyRepository};

/// Opens MySQL pools to a legacy PMD database on demand.
pub struct MySqlLegacyConnector {
    max_connections: u32,
}

impl MySqlLegacyConnector {
    pub fn new(max_connections: u32) -> Self {
        Self { max_connections }
    }
}

#[async_trait]
impl LegacyConnector for MySqlLegacyConnector {
    async fn connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn LegacyRepository>, LegacyRepositoryError> {
        let pool = connect_pool(settings.connect_options(), self.max_connections).await?;
        info!(
            host = %settings.host,
            database = %settings.database,
            table_prefix = %settings.table_prefix,
            "Connected to legacy database"
        );
        Ok(Arc::new(MySqlLegacyRepository::new(
            pool,
            &settings.table_prefix,
        )?))
    }
}
