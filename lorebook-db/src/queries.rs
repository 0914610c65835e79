//! Read queries: listings, substring search, exact filters, by-key lookups.
//!
//! Results come back in store-iteration order; callers must not assume any
//! ordering beyond "as stored".

use lorebook_catalog::types::{Ability, Champion, Region};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

const CHAMPION_COLUMNS: &str = "id_campeon, nombre_campeon, apodo, campeones_con_relacion,
     biografia, apariencion_en_cinematicas, numero_de_relatos_cortos, rol, raza,
     numero_de_aspectos, dificultad";

const REGION_COLUMNS: &str =
    "id_region, nombre_region, descripcion_region, historias_relacionadas";

const ABILITY_COLUMNS: &str =
    "nombre_habilidad, pasiva, asignacion_de_tecla, descripcion_habilidad, link, id_campeon";

// ── Champion queries ────────────────────────────────────────────────────────

/// List all champions.
pub fn list_champions(conn: &Connection) -> Result<Vec<Champion>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {CHAMPION_COLUMNS} FROM campeon"))?;
    let rows = stmt.query_map([], row_to_champion)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Search champions whose name or nickname contains the given text
/// (LIKE semantics).
pub fn search_champions_by_text(
    conn: &Connection,
    text: &str,
) -> Result<Vec<Champion>, OperationError> {
    let pattern = format!("%{}%", text);
    let mut stmt = conn.prepare(&format!(
        "SELECT {CHAMPION_COLUMNS} FROM campeon
         WHERE nombre_campeon LIKE ?1 OR apodo LIKE ?1"
    ))?;
    let rows = stmt.query_map(params![pattern], row_to_champion)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List champions with exactly the given role (equality, not substring).
pub fn champions_by_role(conn: &Connection, role: &str) -> Result<Vec<Champion>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {CHAMPION_COLUMNS} FROM campeon WHERE rol = ?1"))?;
    let rows = stmt.query_map(params![role], row_to_champion)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch a champion by id. `None` means not found, which is not an error.
pub fn get_champion(conn: &Connection, id: i64) -> Result<Option<Champion>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CHAMPION_COLUMNS} FROM campeon WHERE id_campeon = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_champion);
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Highest champion id currently stored, or 0 for an empty table. Importers
/// seed their id counter from this.
pub fn max_champion_id(conn: &Connection) -> Result<i64, OperationError> {
    let max: i64 = conn.query_row(
        "SELECT COALESCE(MAX(id_campeon), 0) FROM campeon",
        [],
        |row| row.get(0),
    )?;
    Ok(max)
}

// ── Region queries ──────────────────────────────────────────────────────────

/// List all regions.
pub fn list_regions(conn: &Connection) -> Result<Vec<Region>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {REGION_COLUMNS} FROM region"))?;
    let rows = stmt.query_map([], row_to_region)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Search regions whose description contains the given text.
pub fn search_regions_by_text(
    conn: &Connection,
    text: &str,
) -> Result<Vec<Region>, OperationError> {
    let pattern = format!("%{}%", text);
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGION_COLUMNS} FROM region WHERE descripcion_region LIKE ?1"
    ))?;
    let rows = stmt.query_map(params![pattern], row_to_region)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List regions with strictly more than `min_stories` related stories.
pub fn regions_with_min_stories(
    conn: &Connection,
    min_stories: i64,
) -> Result<Vec<Region>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGION_COLUMNS} FROM region WHERE historias_relacionadas > ?1"
    ))?;
    let rows = stmt.query_map(params![min_stories], row_to_region)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch a region by id.
pub fn get_region(conn: &Connection, id: i64) -> Result<Option<Region>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGION_COLUMNS} FROM region WHERE id_region = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_region);
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Highest region id currently stored, or 0 for an empty table.
pub fn max_region_id(conn: &Connection) -> Result<i64, OperationError> {
    let max: i64 = conn.query_row(
        "SELECT COALESCE(MAX(id_region), 0) FROM region",
        [],
        |row| row.get(0),
    )?;
    Ok(max)
}

/// Ids of the champions belonging to a region.
pub fn region_champion_ids(conn: &Connection, region_id: i64) -> Result<Vec<i64>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT id_campeon FROM region_campeon WHERE id_region = ?1")?;
    let rows = stmt.query_map(params![region_id], |row| row.get::<_, i64>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Names of the champions belonging to a region, via the junction table.
pub fn champion_names_for_region(
    conn: &Connection,
    region_id: i64,
) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT c.nombre_campeon FROM campeon c
         JOIN region_campeon rc ON rc.id_campeon = c.id_campeon
         WHERE rc.id_region = ?1",
    )?;
    let rows = stmt.query_map(params![region_id], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Ability queries ─────────────────────────────────────────────────────────

/// List all abilities.
pub fn list_abilities(conn: &Connection) -> Result<Vec<Ability>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {ABILITY_COLUMNS} FROM habilidad"))?;
    let rows = stmt.query_map([], row_to_ability)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Search abilities whose name or description contains the given text.
pub fn search_abilities_by_text(
    conn: &Connection,
    text: &str,
) -> Result<Vec<Ability>, OperationError> {
    let pattern = format!("%{}%", text);
    let mut stmt = conn.prepare(&format!(
        "SELECT {ABILITY_COLUMNS} FROM habilidad
         WHERE nombre_habilidad LIKE ?1 OR descripcion_habilidad LIKE ?1"
    ))?;
    let rows = stmt.query_map(params![pattern], row_to_ability)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List the abilities owned by a champion.
pub fn abilities_for_champion(
    conn: &Connection,
    champion_id: i64,
) -> Result<Vec<Ability>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ABILITY_COLUMNS} FROM habilidad WHERE id_campeon = ?1"
    ))?;
    let rows = stmt.query_map(params![champion_id], row_to_ability)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch an ability by its name (the primary key).
pub fn get_ability(conn: &Connection, name: &str) -> Result<Option<Ability>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ABILITY_COLUMNS} FROM habilidad WHERE nombre_habilidad = ?1"
    ))?;
    let result = stmt.query_row(params![name], row_to_ability);
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog record counts.
pub fn catalog_counts(conn: &Connection) -> Result<CatalogCounts, OperationError> {
    let champions: i64 = conn.query_row("SELECT COUNT(*) FROM campeon", [], |r| r.get(0))?;
    let regions: i64 = conn.query_row("SELECT COUNT(*) FROM region", [], |r| r.get(0))?;
    let abilities: i64 = conn.query_row("SELECT COUNT(*) FROM habilidad", [], |r| r.get(0))?;
    let region_links: i64 =
        conn.query_row("SELECT COUNT(*) FROM region_campeon", [], |r| r.get(0))?;

    Ok(CatalogCounts {
        champions,
        regions,
        abilities,
        region_links,
    })
}

/// Summary record counts for the catalog.
#[derive(Debug)]
pub struct CatalogCounts {
    pub champions: i64,
    pub regions: i64,
    pub abilities: i64,
    pub region_links: i64,
}

// ── Row mapping helpers ─────────────────────────────────────────────────────

fn row_to_champion(row: &rusqlite::Row<'_>) -> rusqlite::Result<Champion> {
    Ok(Champion {
        id: row.get(0)?,
        name: row.get(1)?,
        nickname: row.get(2)?,
        related_champions: row.get(3)?,
        biography: row.get(4)?,
        cinematic: row.get(5)?,
        short_stories: row.get(6)?,
        role: row.get(7)?,
        race: row.get(8)?,
        aspects: row.get(9)?,
        difficulty: row.get(10)?,
    })
}

fn row_to_region(row: &rusqlite::Row<'_>) -> rusqlite::Result<Region> {
    Ok(Region {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        story_count: row.get(3)?,
    })
}

fn row_to_ability(row: &rusqlite::Row<'_>) -> rusqlite::Result<Ability> {
    let hotkey: String = row.get(2)?;
    Ok(Ability {
        name: row.get(0)?,
        passive: row.get(1)?,
        hotkey: hotkey.chars().next().unwrap_or_default(),
        description: row.get(3)?,
        link: row.get(4)?,
        champion_id: row.get(5)?,
    })
}
