//! PMD Importer Library
//!
//! This library wires the importer application: configuration and
//! dependency setup, the command-line surface, the `convert` command and the
//! HTTP wizard server.

pub mod cli;
pub mod config;
pub mod convert;
pub mod errors;
pub mod server;

pub use config::{AppConfig, Dependencies};
pub use errors::ImportingError;
