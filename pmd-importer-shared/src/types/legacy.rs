//! Typed rows of the legacy PhpMyDirectory tables.
//!
//! Rows are decoded into these structs once, at the store boundary. Text
//! columns that are `NULL` in the legacy database arrive as empty strings and
//! unusable dates (MySQL zero dates, garbage) arrive as `None`.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A row of `pmd_listings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyListing {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub friendly_url: String,
    pub description: String,
    pub description_short: String,
    pub date: Option<NaiveDateTime>,
    pub date_update: Option<NaiveDateTime>,
    pub primary_category_id: u64,
    pub ip: String,
    pub rating: f64,
    pub listing_address1: String,
    pub listing_address2: String,
    pub location_text_1: String,
    pub location_text_2: String,
    pub listing_zip: String,
    pub latitude: String,
    pub longitude: String,
    pub phone: String,
    pub twitter_id: String,
    pub facebook_page_id: String,
    pub claimed: bool,
    pub featured: bool,
    pub pagerank_expiration: Option<NaiveDateTime>,
    pub status: String,
    pub www: String,
    pub mail: String,
    pub hours: String,
}

/// A row of `pmd_categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCategory {
    pub id: u64,
    pub title: String,
    pub friendly_url: String,
    pub parent_id: u64,
    pub count_total: u64,
}

/// A row of `pmd_users`.
///
/// `pass` is the legacy password hash. It is not verifiable by WordPress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUser {
    pub id: u64,
    pub login: String,
    pub pass: String,
    pub user_email: String,
    pub created: Option<NaiveDateTime>,
    pub user_first_name: String,
    pub user_last_name: String,
}
