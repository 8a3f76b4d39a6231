mod entity_kind;
mod import_report;
mod legacy;
mod place_detail;
mod post;
mod term;
mod user;

pub use entity_kind::{EntityKind, UnsupportedEntityKind};
pub use import_report::ImportReport;
pub use legacy::{LegacyCategory, LegacyListing, LegacyUser};
pub use place_detail::PlaceDetail;
pub use post::Post;
pub use term::{Term, TermTaxonomy};
pub use user::User;
