//! Configuration module for the PMD Importer.
//! Reads the environment once and wires the stores the commands run against.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::AppConfig;
