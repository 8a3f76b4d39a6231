//! This module defines the record mapper: pure functions that transpose one
//! legacy PMD record into the WordPress and GeoDirectory records it becomes.
//!
//! Mapping never touches a store, never filters and never fails. Whether a
//! record should be imported at all is the importer's decision.
mod category;
mod listing;
mod user;

pub use category::map_category;
pub use listing::map_listing;
pub use user::map_user;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Post type of imported listings.
pub const PLACE_POST_TYPE: &str = "place";

/// Path segment between the site URL and a place's slug in its guid.
pub const PLACES_PATH: &str = "/places/";

/// Taxonomy imported categories belong to.
pub const PLACE_CATEGORY_TAXONOMY: &str = "place-category";

pub const TWITTER_BASE_URL: &str = "https://twitter.com/";
pub const FACEBOOK_BASE_URL: &str = "https://www.facebook.com/";

/// Map settings written by the wizard field set.
pub const DEFAULT_MAPVIEW: &str = "ROADMAP";
pub const DEFAULT_MAPZOOM: &str = "12";

/// Which of the two historical listing field sets to produce.
///
/// The command path and the wizard path of the legacy tool wrote different
/// place detail fields. Both are kept until the canonical mapping is decided:
///
/// * `Wizard` prefixes social handles with the platform URL and fills
///   `email`, `website`, `mapview` and `mapzoom`.
/// * `Command` writes raw social handles and leaves those four columns unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingFieldSet {
    #[default]
    Wizard,
    Command,
}

impl fmt::Display for ListingFieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingFieldSet::Wizard => f.write_str("wizard"),
            ListingFieldSet::Command => f.write_str("command"),
        }
    }
}

/// Site-level inputs to the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperContext {
    /// Base URL of the WordPress site, e.g. `https://example.com`.
    pub site_url: String,
    pub field_set: ListingFieldSet,
}

impl MapperContext {
    pub fn new(site_url: impl Into<String>, field_set: ListingFieldSet) -> Self {
        Self {
            site_url: site_url.into(),
            field_set,
        }
    }

    /// Builds the guid of a place from its slug.
    pub fn place_guid(&self, slug: &str) -> String {
        format!("{}{}{}", self.site_url.trim_end_matches('/'), PLACES_PATH, slug)
    }
}

/// Recodes a legacy listing status into a WordPress post status.
///
/// `active` becomes `publish`, `suspended` becomes `trash`, anything else
/// passes through unchanged.
pub fn map_status(status: &str) -> String {
    match status {
        "active" => "publish".to_string(),
        "suspended" => "trash".to_string(),
        other => other.to_string(),
    }
}
