use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of GeoDirectory's `geodir_gd_place_detail` table, keyed by post id.
///
/// The `email`, `website`, `mapview` and `mapzoom` columns are only populated
/// by the wizard field set; `None` leaves the column at its table default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub post_id: u64,
    pub post_title: String,
    pub post_status: String,
    pub post_category: String,
    pub default_category: u64,
    pub featured: bool,
    pub claimed: bool,
    pub expire_date: Option<NaiveDate>,
    pub submit_ip: String,
    pub overall_rating: f64,
    pub rating_count: u64,
    pub street: String,
    pub street2: String,
    pub city: String,
    pub region: String,
    pub zip: String,
    pub latitude: String,
    pub longitude: String,
    pub phone: String,
    pub twitter: String,
    pub facebook: String,
    pub business_hours: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub mapview: Option<String>,
    pub mapzoom: Option<String>,
}
