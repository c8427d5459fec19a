//! CSV extraction and loading into the five tables.

pub mod csv_source;
pub mod decimal;
pub mod importer;
pub mod records;

pub use importer::import_all;
