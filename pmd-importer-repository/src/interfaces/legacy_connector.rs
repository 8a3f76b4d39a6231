use crate::config::ConnectionSettings;
use crate::errors::LegacyRepositoryError;
use crate::interfaces::LegacyRepository;
use std::sync::Arc;

/// Opens a legacy repository from operator-supplied credentials.
///
/// The wizard only learns the legacy credentials at request time, so it holds
/// a connector instead of a repository.
#[async_trait::async_trait]
pub trait LegacyConnector: Send + Sync {
    async fn connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn LegacyRepository>, LegacyRepositoryError>;
}
