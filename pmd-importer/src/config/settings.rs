use pmd_importer_repository::config::{DEFAULT_LEGACY_PREFIX, DEFAULT_WORDPRESS_PREFIX};
use std::env;
use std::net::SocketAddr;

use crate::errors::ImportingError;

const DEFAULT_SITE_URL: &str = "http://localhost";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_WIZARD_ADDR: &str = "127.0.0.1:8080";

/// Settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// WordPress database.
    pub database_url: String,
    /// PMD database; the WordPress database when unset.
    pub legacy_database_url: String,
    pub wordpress_table_prefix: String,
    pub legacy_table_prefix: String,
    pub site_url: String,
    pub max_connections: u32,
    pub wizard_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ImportingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImportingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ImportingError::Config("DATABASE_URL must be set".to_string()))?;
        let legacy_database_url =
            var("LEGACY_DATABASE_URL").unwrap_or_else(|| database_url.clone());

        let max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(value) => value.trim().parse().map_err(|_| {
                ImportingError::Config(format!("DB_MAX_CONNECTIONS is not a number: {value}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let wizard_addr = var("WIZARD_ADDR")
            .unwrap_or_else(|| DEFAULT_WIZARD_ADDR.to_string());
        let wizard_addr = wizard_addr.trim().parse().map_err(|_| {
            ImportingError::Config(format!("WIZARD_ADDR is not a socket address: {wizard_addr}"))
        })?;

        Ok(Self {
            database_url,
            legacy_database_url,
            wordpress_table_prefix: var("WP_TABLE_PREFIX")
                .unwrap_or_else(|| DEFAULT_WORDPRESS_PREFIX.to_string()),
            legacy_table_prefix: var("PMD_TABLE_PREFIX")
                .unwrap_or_else(|| DEFAULT_LEGACY_PREFIX.to_string()),
            site_url: var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            max_connections,
            wizard_addr,
        })
    }
}
