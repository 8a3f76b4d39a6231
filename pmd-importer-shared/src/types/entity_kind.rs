use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The kinds of legacy record an import can target.
///
/// Each kind maps to one legacy PMD table. `EntityKind::IMPORT_ORDER` lists
/// them in the order a full import must run: listings reference both the
/// author id and the category ids, so users and categories go first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Category,
    Listing,
}

/// Returned when an entity selection does not name a configured source table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported entity type: {0}")]
pub struct UnsupportedEntityKind(pub String);

impl EntityKind {
    pub const IMPORT_ORDER: [EntityKind; 3] =
        [EntityKind::User, EntityKind::Category, EntityKind::Listing];

    /// Legacy table name without the installation prefix.
    pub fn legacy_table(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Category => "categories",
            EntityKind::Listing => "listings",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Category => "category",
            EntityKind::Listing => "listing",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnsupportedEntityKind;

    /// Accepts both the singular kind and the legacy table name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(EntityKind::User),
            "category" | "categories" => Ok(EntityKind::Category),
            "listing" | "listings" => Ok(EntityKind::Listing),
            _ => Err(UnsupportedEntityKind(s.to_string())),
        }
    }
}
