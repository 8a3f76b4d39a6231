//! The `convert` command: one import run from the command line.
use pmd_importer_pipeline::errors::ImporterError;
use pmd_importer_pipeline::importer::Importer;
use pmd_importer_shared::types::{EntityKind, ImportReport};
use tracing::{error, warn};

use crate::cli::RemoveTable;
use crate::errors::ImportingError;

/// Imports `kind` (every kind, in import order, when `None`) and applies the
/// `--removetable` policy to each table whose import was attempted.
///
/// A run over every kind stops at the first failing kind; the tables after it
/// are never imported, so they are never dropped.
///
/// # Returns
///
/// The import reports, or the import's error once the tables the policy
/// selects have been dropped.
pub async fn convert(
    importer: &Importer,
    kind: Option<EntityKind>,
    removetable: Option<RemoveTable>,
) -> Result<Vec<ImportReport>, ImportingError> {
    let mut reports = Vec::new();
    let mut attempted = Vec::new();
    let mut failure: Option<ImporterError> = None;

    let kinds = match kind {
        Some(kind) => vec![kind],
        None => EntityKind::IMPORT_ORDER.to_vec(),
    };
    for current in kinds {
        let result = match kind {
            Some(_) => importer.import(current).await,
            None => importer.import_allowing_empty(current).await,
        };
        match result {
            Ok(report) => {
                attempted.push((current, true));
                reports.push(report);
            }
            Err(e) => {
                attempted.push((current, false));
                failure = Some(e);
                break;
            }
        }
    }

    if let Some(mode) = removetable {
        for (kind, succeeded) in attempted {
            if !mode.should_drop(succeeded) {
                warn!(kind = %kind, "Import did not finish, legacy table kept");
                continue;
            }
            if let Err(e) = importer.remove_legacy_table(kind).await {
                if let Some(import_error) = &failure {
                    error!(error = %import_error, "Import failed");
                }
                return Err(e.into());
            }
        }
    }

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(reports),
    }
}
