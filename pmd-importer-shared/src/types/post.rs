use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A row of the WordPress `posts` table.
///
/// Imported listings keep their legacy id as `ID`, so listing ids and post ids
/// stay in correspondence for the lifetime of the migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub status: String,
    pub parent_id: u64,
    pub guid: String,
    pub post_type: String,
    pub comment_status: String,
    pub ping_status: String,
    pub comment_count: u64,
    pub menu_order: i32,
}
