mod cache;
mod importer;
mod wizard;

pub use cache::CacheError;
pub use importer::ImporterError;
pub use wizard::WizardError;
