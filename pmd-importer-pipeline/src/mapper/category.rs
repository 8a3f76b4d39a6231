use pmd_importer_shared::types::{LegacyCategory, Term, TermTaxonomy};

use crate::mapper::PLACE_CATEGORY_TAXONOMY;

/// Maps a legacy category to a term and its `place-category` taxonomy row.
///
/// The legacy id is kept as the term id so listings can keep pointing at it.
pub fn map_category(category: &LegacyCategory) -> (Term, TermTaxonomy) {
    let term = Term {
        term_id: category.id,
        name: category.title.clone(),
        slug: category.friendly_url.clone(),
        term_group: 0,
    };
    let taxonomy = TermTaxonomy {
        term_id: category.id,
        taxonomy: PLACE_CATEGORY_TAXONOMY.to_string(),
        description: String::new(),
        parent: category.parent_id,
        count: category.count_total,
    };
    (term, taxonomy)
}
