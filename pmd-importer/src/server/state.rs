use pmd_importer_pipeline::wizard::ImportWizard;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub wizard: Arc<ImportWizard>,
}
