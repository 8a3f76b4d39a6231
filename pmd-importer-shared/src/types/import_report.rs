use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of importing one legacy table.
///
/// `fetched == inserted + skipped` when the import ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub kind: EntityKind,
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: usize,
}

impl ImportReport {
    pub fn new(kind: EntityKind, fetched: usize) -> Self {
        Self {
            kind,
            fetched,
            inserted: 0,
            skipped: 0,
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} import finished: {} fetched, {} inserted, {} skipped",
            self.kind, self.fetched, self.inserted, self.skipped
        )
    }
}
