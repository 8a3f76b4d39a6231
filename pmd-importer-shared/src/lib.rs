//! # PMD Importer Shared
//! This crate defines the data structures shared across the importer crates.
//! It includes the typed legacy PhpMyDirectory records, the WordPress and
//! GeoDirectory target records, and the entity kinds an import can target.
pub mod types;
