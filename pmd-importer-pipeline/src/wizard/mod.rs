//! This module defines the three-step import wizard.
//!
//! 1. Collect the legacy database settings (defaults, or the cached ones).
//! 2. Connect with the submitted settings and cache them for an hour.
//! 3. Import the selected entity kind using the cached settings.
//!
//! Steps only move forward. The wizard itself is stateless: everything that
//! must survive between requests lives in the `TransientCache`.
use pmd_importer_repository::{ConnectionSettings, LegacyConnector, TablePrefix, TargetRepository};
use pmd_importer_shared::types::{EntityKind, ImportReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::cache::{get_json, set_json, TransientCache};
use crate::errors::WizardError;
use crate::importer::Importer;
use crate::mapper::MapperContext;

/// Cache key the step 2 settings are stored under.
pub const CREDENTIALS_CACHE_KEY: &str = "pmd_importer_db";

/// How long cached settings stay valid.
pub const CREDENTIALS_TTL: Duration = Duration::from_secs(3600);

/// One submitted wizard form.
///
/// Every field but `step` is optional; which ones are required depends on
/// the step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardRequest {
    pub step: u8,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub table_prefix: Option<String>,
    #[serde(default)]
    pub entity: Option<String>,
}

impl WizardRequest {
    fn connection_settings(&self) -> ConnectionSettings {
        let defaults = ConnectionSettings::default();
        ConnectionSettings {
            host: self.host.clone().unwrap_or_default(),
            port: self.port.unwrap_or(defaults.port),
            user: self.user.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            database: self.database.clone().unwrap_or_default(),
            table_prefix: self
                .table_prefix
                .clone()
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or(defaults.table_prefix),
        }
    }
}

/// What the wizard tells the operator after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardResponse {
    /// The step that was handled.
    pub step: u8,
    /// The step the operator should submit next.
    pub next_step: u8,
    pub message: String,
    /// Settings to prefill the form with. Never carries a password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ConnectionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ImportReport>,
}

/// Drives the wizard steps.
pub struct ImportWizard {
    cache: Arc<dyn TransientCache>,
    connector: Arc<dyn LegacyConnector>,
    target: Arc<dyn TargetRepository>,
    context: MapperContext,
}

impl ImportWizard {
    /// Creates a new `ImportWizard`.
    ///
    /// # Arguments
    ///
    /// * `cache` - Where step 2 leaves the settings for step 3
    /// * `connector` - Opens the legacy store from operator-supplied settings
    /// * `target` - The WordPress store imports are written to
    /// * `context` - Mapper context for listing imports
    pub fn new(
        cache: Arc<dyn TransientCache>,
        connector: Arc<dyn LegacyConnector>,
        target: Arc<dyn TargetRepository>,
        context: MapperContext,
    ) -> Self {
        Self {
            cache,
            connector,
            target,
            context,
        }
    }

    /// Handles one wizard request.
    pub async fn handle(&self, request: &WizardRequest) -> Result<WizardResponse, WizardError> {
        match request.step {
            1 => self.collect_settings().await,
            2 => self.connect(request).await,
            3 => self.import(request).await,
            step => Err(WizardError::UnknownStep(step)),
        }
    }

    async fn collect_settings(&self) -> Result<WizardResponse, WizardError> {
        let cached: Option<ConnectionSettings> =
            get_json(self.cache.as_ref(), CREDENTIALS_CACHE_KEY).await?;
        let mut settings = cached.unwrap_or_default();
        settings.password.clear();

        Ok(WizardResponse {
            step: 1,
            next_step: 2,
            message: "Enter the PhpMyDirectory database settings".to_string(),
            settings: Some(settings),
            report: None,
        })
    }

    async fn connect(&self, request: &WizardRequest) -> Result<WizardResponse, WizardError> {
        let settings = request.connection_settings();
        if let Some(field) = settings.missing_fields().first() {
            return Err(WizardError::ConfigurationMissing(field.to_string()));
        }
        TablePrefix::new(&settings.table_prefix)?;

        self.connector
            .connect(&settings)
            .await
            .map_err(WizardError::Connection)?;
        set_json(
            self.cache.as_ref(),
            CREDENTIALS_CACHE_KEY,
            &settings,
            CREDENTIALS_TTL,
        )
        .await?;
        info!(host = %settings.host, database = %settings.database, "Legacy database settings accepted");

        let mut shown = settings;
        shown.password.clear();
        Ok(WizardResponse {
            step: 2,
            next_step: 3,
            message: "Connected to the PhpMyDirectory database".to_string(),
            settings: Some(shown),
            report: None,
        })
    }

    async fn import(&self, request: &WizardRequest) -> Result<WizardResponse, WizardError> {
        let entity = request
            .entity
            .as_deref()
            .filter(|entity| !entity.trim().is_empty())
            .ok_or_else(|| WizardError::ConfigurationMissing("entity".to_string()))?;
        let kind: EntityKind = entity
            .parse()
            .map_err(|_| WizardError::UnsupportedEntitySelection(entity.to_string()))?;

        let settings: ConnectionSettings = get_json(self.cache.as_ref(), CREDENTIALS_CACHE_KEY)
            .await?
            .ok_or_else(|| WizardError::ConfigurationMissing("connection settings".to_string()))?;

        let legacy = self
            .connector
            .connect(&settings)
            .await
            .map_err(WizardError::Connection)?;
        let importer = Importer::new(legacy, self.target.clone(), self.context.clone());
        let report = importer.import(kind).await?;

        Ok(WizardResponse {
            step: 3,
            next_step: 3,
            message: report.to_string(),
            settings: None,
            report: Some(report),
        })
    }
}
