use serde::{Deserialize, Serialize};

/// A row of the WordPress `terms` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term_id: u64,
    pub name: String,
    pub slug: String,
    pub term_group: i64,
}

/// A row of the WordPress `term_taxonomy` table.
///
/// `term_taxonomy_id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTaxonomy {
    pub term_id: u64,
    pub taxonomy: String,
    pub description: String,
    pub parent: u64,
    pub count: u64,
}
