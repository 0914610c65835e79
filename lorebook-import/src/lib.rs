//! Bulk-import CSV files into the lore catalog database.
//!
//! One importer per entity kind. Each importer owns a single transaction
//! for its whole file: row-level format problems are logged and skipped,
//! while fatal conditions (I/O, storage errors, an unresolvable ability
//! owner) roll the entire file back.

pub mod csv_import;

pub use csv_import::{
    ImportError, ImportStats, import_abilities, import_champions, import_regions,
};
