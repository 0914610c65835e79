//! CSV-to-record ingestion for champions, regions, and abilities.
//!
//! All three file formats are comma-delimited with a header row that is
//! always skipped. Quoted fields may contain literal commas; after the
//! reader splits a row, every field is cleaned by stripping any remaining
//! double quotes and trimming surrounding whitespace.

use std::fs::File;
use std::path::Path;

use lorebook_catalog::types::{Ability, Champion, Region};
use lorebook_db::operations::{self, OperationError};
use lorebook_db::queries;
use rusqlite::Connection;
use thiserror::Error;

/// Fatal conditions that abort a whole file's transaction. Row-level format
/// problems never surface here; they are logged and counted instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("No champion named '{champion}' for ability '{ability}'")]
    UnknownChampion { champion: String, ability: String },
}

/// Statistics from one file's ingestion run.
#[derive(Debug, Default)]
pub struct ImportStats {
    /// Rows persisted.
    pub rows_imported: u64,
    /// Rows rejected for a wrong field count or unreadable record.
    pub rows_bad_format: u64,
    /// Rows rejected for a non-numeric value in a numeric column.
    pub rows_bad_number: u64,
    /// Region↔champion links written.
    pub links_created: u64,
    /// Region tail ids that resolved to no champion and were dropped.
    pub links_dropped: u64,
}

/// Strip double quotes and surrounding whitespace from a raw CSV field.
fn clean_field(field: &str) -> String {
    let stripped = field.replace('"', "");
    stripped.trim().to_string()
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, ImportError> {
    let file = File::open(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

// ── Champion import ─────────────────────────────────────────────────────────

/// Import champions from a CSV file.
///
/// Expects exactly 10 fields per row: name, nickname, relation count,
/// biography, cinematic-appearance text, short-story count, role, race,
/// aspect count, difficulty. Malformed rows are skipped; the whole file
/// commits in one transaction. Identifiers continue from the store's
/// current maximum, monotonically within the run.
pub fn import_champions(conn: &Connection, path: &Path) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut reader = open_reader(path)?;

    let tx = conn.unchecked_transaction()?;
    let mut next_id = queries::max_champion_id(&tx)? + 1;

    for (row, result) in reader.records().enumerate() {
        let line = row + 2; // 1-based, after the header
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable champion row at line {line}: {e}");
                stats.rows_bad_format += 1;
                continue;
            }
        };
        if record.len() != 10 {
            log::warn!(
                "Skipping champion row at line {line}: expected 10 fields, found {}",
                record.len()
            );
            stats.rows_bad_format += 1;
            continue;
        }
        let fields: Vec<String> = record.iter().map(clean_field).collect();

        let (related_champions, short_stories, aspects) = match (
            fields[2].parse::<i64>(),
            fields[5].parse::<i64>(),
            fields[8].parse::<i64>(),
        ) {
            (Ok(a), Ok(b), Ok(c)) => (a, b, c),
            _ => {
                log::warn!("Skipping champion row at line {line}: non-numeric count field");
                stats.rows_bad_number += 1;
                continue;
            }
        };

        let champion = Champion {
            id: next_id,
            name: fields[0].clone(),
            nickname: fields[1].clone(),
            related_champions,
            biography: fields[3].clone(),
            cinematic: fields[4].clone(),
            short_stories,
            role: fields[6].clone(),
            race: fields[7].clone(),
            aspects,
            difficulty: fields[9].clone(),
        };
        operations::insert_champion(&tx, &champion)?;
        next_id += 1;
        stats.rows_imported += 1;
    }

    tx.commit()?;
    log::info!(
        "Imported {} champion(s) from {} ({} bad format, {} bad number)",
        stats.rows_imported,
        path.display(),
        stats.rows_bad_format,
        stats.rows_bad_number,
    );
    Ok(stats)
}

// ── Ability import ──────────────────────────────────────────────────────────

/// Import abilities from a CSV file.
///
/// Expects 6 fields per row: champion name, ability name, passive flag
/// ("true"/"false"), hotkey character, description, link. The owning
/// champion is resolved by exact name; a missing champion is fatal and
/// rolls back the entire file, unlike the soft skips elsewhere.
pub fn import_abilities(conn: &Connection, path: &Path) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut reader = open_reader(path)?;

    let tx = conn.unchecked_transaction()?;

    for (row, result) in reader.records().enumerate() {
        let line = row + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable ability row at line {line}: {e}");
                stats.rows_bad_format += 1;
                continue;
            }
        };
        if record.len() != 6 {
            log::warn!(
                "Skipping ability row at line {line}: expected 6 fields, found {}",
                record.len()
            );
            stats.rows_bad_format += 1;
            continue;
        }
        let fields: Vec<String> = record.iter().map(clean_field).collect();

        let Some(hotkey) = fields[3].chars().next() else {
            log::warn!("Skipping ability row at line {line}: empty hotkey field");
            stats.rows_bad_format += 1;
            continue;
        };

        let champion_name = &fields[0];
        let Some(champion_id) = operations::find_champion_by_name(&tx, champion_name)? else {
            // Fatal: dropping the transaction rolls back every row so far.
            return Err(ImportError::UnknownChampion {
                champion: champion_name.clone(),
                ability: fields[1].clone(),
            });
        };

        let ability = Ability {
            name: fields[1].clone(),
            passive: fields[2].eq_ignore_ascii_case("true"),
            hotkey,
            description: fields[4].clone(),
            link: fields[5].clone(),
            champion_id,
        };
        operations::insert_ability(&tx, &ability)?;
        stats.rows_imported += 1;
    }

    tx.commit()?;
    log::info!(
        "Imported {} ability(ies) from {} ({} bad format)",
        stats.rows_imported,
        path.display(),
        stats.rows_bad_format,
    );
    Ok(stats)
}

// ── Region import ───────────────────────────────────────────────────────────

/// Import regions from a CSV file.
///
/// Expects name, description, story count, then a variable-length tail of
/// champion ids. Tail ids that resolve to no stored champion are dropped
/// from the region's set without failing the row; empty trailing cells are
/// ignored.
pub fn import_regions(conn: &Connection, path: &Path) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut reader = open_reader(path)?;

    let tx = conn.unchecked_transaction()?;
    let mut next_id = queries::max_region_id(&tx)? + 1;

    for (row, result) in reader.records().enumerate() {
        let line = row + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable region row at line {line}: {e}");
                stats.rows_bad_format += 1;
                continue;
            }
        };
        if record.len() < 3 {
            log::warn!(
                "Skipping region row at line {line}: expected at least 3 fields, found {}",
                record.len()
            );
            stats.rows_bad_format += 1;
            continue;
        }
        let fields: Vec<String> = record.iter().map(clean_field).collect();

        let Ok(story_count) = fields[2].parse::<i64>() else {
            log::warn!("Skipping region row at line {line}: non-numeric story count");
            stats.rows_bad_number += 1;
            continue;
        };
        let tail: Result<Vec<i64>, _> = fields[3..]
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.parse::<i64>())
            .collect();
        let Ok(champion_ids) = tail else {
            log::warn!("Skipping region row at line {line}: non-numeric champion id");
            stats.rows_bad_number += 1;
            continue;
        };

        let region = Region {
            id: next_id,
            name: fields[0].clone(),
            description: fields[1].clone(),
            story_count,
        };
        operations::insert_region(&tx, &region)?;

        for champion_id in champion_ids {
            if operations::champion_exists(&tx, champion_id)? {
                operations::link_region_champion(&tx, next_id, champion_id)?;
                stats.links_created += 1;
            } else {
                // Soft skip: unresolved members are dropped, never surfaced.
                log::debug!(
                    "Region '{}' references unknown champion id {champion_id}; dropped",
                    region.name
                );
                stats.links_dropped += 1;
            }
        }

        next_id += 1;
        stats.rows_imported += 1;
    }

    tx.commit()?;
    log::info!(
        "Imported {} region(s) from {} ({} links, {} dropped)",
        stats.rows_imported,
        path.display(),
        stats.links_created,
        stats.links_dropped,
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_field_strips_quotes_and_whitespace() {
        assert_eq!(clean_field("  \"Ahri\"  "), "Ahri");
        assert_eq!(clean_field("\"a, b\""), "a, b");
        assert_eq!(clean_field("plain"), "plain");
    }

    #[test]
    fn clean_field_strips_interior_quotes() {
        assert_eq!(clean_field("the \"Fox\""), "the Fox");
        assert_eq!(clean_field(""), "");
    }
}
