//! # PMD Importer Pipeline
//! This crate holds the migration logic: the record mapper that transposes
//! legacy PMD records into WordPress/GeoDirectory records, the importer that
//! drives one legacy table at a time through it, and the three-step import
//! wizard with its transient credential cache.
pub mod cache;
pub mod importer;
pub mod mapper;
pub mod wizard;

pub mod errors;
