//! Connection settings and table naming for the MySQL stores.
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;
use thiserror::Error;

/// Default legacy MySQL port.
pub const DEFAULT_PORT: u16 = 3306;

/// Default legacy PMD table prefix.
pub const DEFAULT_LEGACY_PREFIX: &str = "pmd_";

/// Default WordPress table prefix.
pub const DEFAULT_WORDPRESS_PREFIX: &str = "wp_";

/// A validated table-name prefix.
///
/// Table names cannot be bound as query parameters, so the prefix is spliced
/// into SQL text. Only ASCII alphanumerics and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePrefix(String);

/// Returned when a table prefix contains anything but ASCII alphanumerics and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid table prefix: {0}")]
pub struct InvalidTablePrefix(pub String);

impl TablePrefix {
    /// Validates `prefix`, carrying the offending value on failure.
    pub fn new(prefix: &str) -> Result<Self, InvalidTablePrefix> {
        if prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            Ok(Self(prefix.to_string()))
        } else {
            Err(InvalidTablePrefix(prefix.to_string()))
        }
    }

    /// Returns the full table name for `table`.
    pub fn table(&self, table: &str) -> String {
        format!("{}{}", self.0, table)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Credentials for the legacy PMD database, as collected by the wizard.
///
/// These are cached between wizard steps, so they (de)serialize with serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_legacy_prefix")]
    pub table_prefix: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_legacy_prefix() -> String {
    DEFAULT_LEGACY_PREFIX.to_string()
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: String::new(),
            database: String::new(),
            table_prefix: default_legacy_prefix(),
        }
    }
}

impl ConnectionSettings {
    /// Names of required settings that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.trim().is_empty() {
            missing.push("host");
        }
        if self.user.trim().is_empty() {
            missing.push("user");
        }
        if self.database.trim().is_empty() {
            missing.push("database");
        }
        missing
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(self.host.trim())
            .port(self.port)
            .username(self.user.trim())
            .password(&self.password)
            .database(self.database.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_prefix_accepts_identifiers() {
        let prefix = TablePrefix::new("wp_2_").unwrap();
        assert_eq!(prefix.table("posts"), "wp_2_posts");
    }

    #[test]
    fn test_table_prefix_rejects_sql() {
        assert_eq!(
            TablePrefix::new("wp_; DROP TABLE x; --"),
            Err(InvalidTablePrefix("wp_; DROP TABLE x; --".to_string()))
        );
    }

    #[test]
    fn test_invalid_table_prefix_message() {
        let err = TablePrefix::new("pmd-").unwrap_err();
        assert_eq!(err.to_string(), "invalid table prefix: pmd-");
    }

    #[test]
    fn test_missing_fields_reports_blank_values() {
        let settings = ConnectionSettings {
            host: " ".to_string(),
            database: "pmd".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.missing_fields(), vec!["host", "user"]);
    }

    #[test]
    fn test_defaults() {
        let settings = ConnectionSettings::default();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 3306);
        assert_eq!(settings.table_prefix, "pmd_");
    }
}
