//! Raw legacy rows and their conversion into typed records.
//!
//! Legacy PMD installations are loose about column types (ids stored as
//! strings, zero dates, `NULL` text), so every column is selected as text and
//! parsed here, once.
use chrono::{NaiveDate, NaiveDateTime};
use pmd_importer_shared::types::{LegacyCategory, LegacyListing, LegacyUser};
use sqlx::FromRow;
use std::str::FromStr;

use crate::errors::LegacyRepositoryError;

/// `(source column, alias)` pairs selected from the listings table.
pub(crate) const LISTING_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("user_id", "user_id"),
    ("title", "title"),
    ("friendly_url", "friendly_url"),
    ("description", "description"),
    ("description_Short", "description_short"),
    ("date", "date"),
    ("date_update", "date_update"),
    ("primary_category_id", "primary_category_id"),
    ("ip", "ip"),
    ("rating", "rating"),
    ("listing_address1", "listing_address1"),
    ("listing_address2", "listing_address2"),
    ("location_text_1", "location_text_1"),
    ("location_text_2", "location_text_2"),
    ("listing_zip", "listing_zip"),
    ("latitude", "latitude"),
    ("longitude", "longitude"),
    ("phone", "phone"),
    ("twitter_id", "twitter_id"),
    ("facebook_page_id", "facebook_page_id"),
    ("claimed", "claimed"),
    ("featured", "featured"),
    ("pagerank_expiration", "pagerank_expiration"),
    ("status", "status"),
    ("www", "www"),
    ("mail", "mail"),
    ("hours", "hours"),
];

pub(crate) const CATEGORY_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("friendly_url", "friendly_url"),
    ("parent_id", "parent_id"),
    ("count_total", "count_total"),
];

pub(crate) const USER_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("login", "login"),
    ("pass", "pass"),
    ("user_email", "user_email"),
    ("created", "created"),
    ("user_first_name", "user_first_name"),
    ("user_last_name", "user_last_name"),
];

/// Builds a `SELECT` that casts every column to text, ordered by id.
pub(crate) fn select_as_text(table: &str, columns: &[(&str, &str)]) -> String {
    let projection = columns
        .iter()
        .map(|(column, alias)| format!("CAST(`{column}` AS CHAR) AS `{alias}`"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {projection} FROM `{table}` ORDER BY `id`")
}

#[derive(Debug, FromRow)]
pub(crate) struct ListingRow {
    id: Option<String>,
    user_id: Option<String>,
    title: Option<String>,
    friendly_url: Option<String>,
    description: Option<String>,
    description_short: Option<String>,
    date: Option<String>,
    date_update: Option<String>,
    primary_category_id: Option<String>,
    ip: Option<String>,
    rating: Option<String>,
    listing_address1: Option<String>,
    listing_address2: Option<String>,
    location_text_1: Option<String>,
    location_text_2: Option<String>,
    listing_zip: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    phone: Option<String>,
    twitter_id: Option<String>,
    facebook_page_id: Option<String>,
    claimed: Option<String>,
    featured: Option<String>,
    pagerank_expiration: Option<String>,
    status: Option<String>,
    www: Option<String>,
    mail: Option<String>,
    hours: Option<String>,
}

#[derive(Debug, FromRow)]
pub(crate) struct CategoryRow {
    id: Option<String>,
    title: Option<String>,
    friendly_url: Option<String>,
    parent_id: Option<String>,
    count_total: Option<String>,
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    id: Option<String>,
    login: Option<String>,
    pass: Option<String>,
    user_email: Option<String>,
    created: Option<String>,
    user_first_name: Option<String>,
    user_last_name: Option<String>,
}

/// Decodes the columns of one row of one table.
struct RowDecoder<'a> {
    table: &'a str,
}

impl RowDecoder<'_> {
    fn number<T>(&self, column: &str, value: Option<String>) -> Result<T, LegacyRepositoryError>
    where
        T: FromStr + Default,
    {
        let value = text(value);
        let value = value.trim();
        if value.is_empty() {
            return Ok(T::default());
        }
        value.parse().map_err(|_| LegacyRepositoryError::InvalidRow {
            table: self.table.to_string(),
            reason: format!("column {column} is not numeric: {value:?}"),
        })
    }

    fn flag(&self, column: &str, value: Option<String>) -> Result<bool, LegacyRepositoryError> {
        Ok(self.number::<i64>(column, value)? != 0)
    }
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Parses a legacy date column. Zero dates and unparsable values are `None`.
pub(crate) fn parse_legacy_datetime(value: Option<&str>) -> Option<NaiveDateTime> {
    let value = value?.trim();
    if value.is_empty() || value.starts_with("0000-00-00") {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl ListingRow {
    pub(crate) fn decode(self, table: &str) -> Result<LegacyListing, LegacyRepositoryError> {
        let d = RowDecoder { table };
        Ok(LegacyListing {
            id: d.number("id", self.id)?,
            user_id: d.number("user_id", self.user_id)?,
            title: text(self.title),
            friendly_url: text(self.friendly_url),
            description: text(self.description),
            description_short: text(self.description_short),
            date: parse_legacy_datetime(self.date.as_deref()),
            date_update: parse_legacy_datetime(self.date_update.as_deref()),
            primary_category_id: d.number("primary_category_id", self.primary_category_id)?,
            ip: text(self.ip),
            rating: d.number("rating", self.rating)?,
            listing_address1: text(self.listing_address1),
            listing_address2: text(self.listing_address2),
            location_text_1: text(self.location_text_1),
            location_text_2: text(self.location_text_2),
            listing_zip: text(self.listing_zip),
            latitude: text(self.latitude),
            longitude: text(self.longitude),
            phone: text(self.phone),
            twitter_id: text(self.twitter_id),
            facebook_page_id: text(self.facebook_page_id),
            claimed: d.flag("claimed", self.claimed)?,
            featured: d.flag("featured", self.featured)?,
            pagerank_expiration: parse_legacy_datetime(self.pagerank_expiration.as_deref()),
            status: text(self.status),
            www: text(self.www),
            mail: text(self.mail),
            hours: text(self.hours),
        })
    }
}

impl CategoryRow {
    pub(crate) fn decode(self, table: &str) -> Result<LegacyCategory, LegacyRepositoryError> {
        let d = RowDecoder { table };
        Ok(LegacyCategory {
            id: d.number("id", self.id)?,
            title: text(self.title),
            friendly_url: text(self.friendly_url),
            parent_id: d.number("parent_id", self.parent_id)?,
            count_total: d.number("count_total", self.count_total)?,
        })
    }
}

impl UserRow {
    pub(crate) fn decode(self, table: &str) -> Result<LegacyUser, LegacyRepositoryError> {
        let d = RowDecoder { table };
        Ok(LegacyUser {
            id: d.number("id", self.id)?,
            login: text(self.login),
            pass: text(self.pass),
            user_email: text(self.user_email),
            created: parse_legacy_datetime(self.created.as_deref()),
            user_first_name: text(self.user_first_name),
            user_last_name: text(self.user_last_name),
        })
    }
}
