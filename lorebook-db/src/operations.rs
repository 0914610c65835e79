//! Mutations: inserts, patch-based updates, and deletes.
//!
//! Not-found is a normal outcome here, not an error: keyed updates and
//! deletes return `false` when the target does not exist, and lookups used
//! during ingestion return `Option`.

use lorebook_catalog::patch::{AbilityPatch, ChampionPatch, RegionPatch};
use lorebook_catalog::types::{Ability, Champion, Region};
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::queries;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ── Inserts ─────────────────────────────────────────────────────────────────

pub fn insert_champion(conn: &Connection, champion: &Champion) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO campeon (id_campeon, nombre_campeon, apodo, campeones_con_relacion,
             biografia, apariencion_en_cinematicas, numero_de_relatos_cortos, rol, raza,
             numero_de_aspectos, dificultad)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            champion.id,
            champion.name,
            champion.nickname,
            champion.related_champions,
            champion.biography,
            champion.cinematic,
            champion.short_stories,
            champion.role,
            champion.race,
            champion.aspects,
            champion.difficulty,
        ],
    )?;
    Ok(())
}

pub fn insert_region(conn: &Connection, region: &Region) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO region (id_region, nombre_region, descripcion_region, historias_relacionadas)
         VALUES (?1, ?2, ?3, ?4)",
        params![region.id, region.name, region.description, region.story_count],
    )?;
    Ok(())
}

/// Insert an ability. The name is the primary key; a duplicate surfaces as
/// a constraint error from the engine.
pub fn insert_ability(conn: &Connection, ability: &Ability) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO habilidad (nombre_habilidad, pasiva, asignacion_de_tecla,
             descripcion_habilidad, link, id_campeon)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ability.name,
            ability.passive,
            ability.hotkey.to_string(),
            ability.description,
            ability.link,
            ability.champion_id,
        ],
    )?;
    Ok(())
}

/// Associate a champion with a region. Repeating an existing pair is a
/// no-op (the junction is a set).
pub fn link_region_champion(
    conn: &Connection,
    region_id: i64,
    champion_id: i64,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT OR IGNORE INTO region_campeon (id_region, id_campeon) VALUES (?1, ?2)",
        params![region_id, champion_id],
    )?;
    Ok(())
}

// ── Lookups used during ingestion ───────────────────────────────────────────

/// Resolve a champion id by exact name match.
pub fn find_champion_by_name(conn: &Connection, name: &str) -> Result<Option<i64>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT id_campeon FROM campeon WHERE nombre_campeon = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![name], |row| row.get::<_, i64>(0));
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether a champion with the given id exists.
pub fn champion_exists(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM campeon WHERE id_campeon = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// ── Partial updates ─────────────────────────────────────────────────────────

/// Apply a patch to the champion with the given id.
///
/// Returns `false` (without side effects beyond the lookup) when no such
/// champion exists.
pub fn update_champion(
    conn: &Connection,
    id: i64,
    patch: &ChampionPatch,
) -> Result<bool, OperationError> {
    let Some(mut champion) = queries::get_champion(conn, id)? else {
        return Ok(false);
    };
    patch.apply(&mut champion);
    conn.execute(
        "UPDATE campeon SET nombre_campeon = ?2, apodo = ?3, rol = ?4, dificultad = ?5
         WHERE id_campeon = ?1",
        params![
            id,
            champion.name,
            champion.nickname,
            champion.role,
            champion.difficulty,
        ],
    )?;
    Ok(true)
}

/// Apply a patch to the region with the given id.
pub fn update_region(
    conn: &Connection,
    id: i64,
    patch: &RegionPatch,
) -> Result<bool, OperationError> {
    let Some(mut region) = queries::get_region(conn, id)? else {
        return Ok(false);
    };
    patch.apply(&mut region);
    conn.execute(
        "UPDATE region SET nombre_region = ?2, descripcion_region = ?3,
             historias_relacionadas = ?4
         WHERE id_region = ?1",
        params![id, region.name, region.description, region.story_count],
    )?;
    Ok(true)
}

/// Apply a patch to the ability with the given name.
///
/// The patch may rename the ability (its primary key); renaming onto an
/// existing name surfaces as a constraint error.
pub fn update_ability(
    conn: &Connection,
    name: &str,
    patch: &AbilityPatch,
) -> Result<bool, OperationError> {
    let Some(mut ability) = queries::get_ability(conn, name)? else {
        return Ok(false);
    };
    patch.apply(&mut ability);
    conn.execute(
        "UPDATE habilidad SET nombre_habilidad = ?2, pasiva = ?3, asignacion_de_tecla = ?4,
             descripcion_habilidad = ?5, link = ?6
         WHERE nombre_habilidad = ?1",
        params![
            name,
            ability.name,
            ability.passive,
            ability.hotkey.to_string(),
            ability.description,
            ability.link,
        ],
    )?;
    Ok(true)
}

// ── Deletes ─────────────────────────────────────────────────────────────────

/// Delete a champion and cascade to everything it owns: its abilities and
/// its region memberships, all in one transaction.
///
/// Returns `false` and commits nothing when no such champion exists.
pub fn delete_champion(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;
    if !champion_exists(&tx, id)? {
        return Ok(false);
    }
    tx.execute("DELETE FROM habilidad WHERE id_campeon = ?1", params![id])?;
    tx.execute(
        "DELETE FROM region_campeon WHERE id_campeon = ?1",
        params![id],
    )?;
    tx.execute("DELETE FROM campeon WHERE id_campeon = ?1", params![id])?;
    tx.commit()?;
    Ok(true)
}

/// Delete a region and its junction rows. Member champions are untouched.
pub fn delete_region(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let exists: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM region WHERE id_region = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(false);
    }
    tx.execute(
        "DELETE FROM region_campeon WHERE id_region = ?1",
        params![id],
    )?;
    tx.execute("DELETE FROM region WHERE id_region = ?1", params![id])?;
    tx.commit()?;
    Ok(true)
}

/// Delete an ability by name. Returns `false` when no such ability exists.
pub fn delete_ability(conn: &Connection, name: &str) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "DELETE FROM habilidad WHERE nombre_habilidad = ?1",
        params![name],
    )?;
    Ok(changed > 0)
}

// ── Conditional bulk deletes ────────────────────────────────────────────────

/// Delete every champion whose cinematic-appearance text equals the given
/// value, cascading as [`delete_champion`] does. All-or-nothing: one
/// transaction covers the whole batch. Returns the number removed.
pub fn delete_champions_by_cinematic(
    conn: &Connection,
    cinematic: &str,
) -> Result<usize, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut stmt =
        tx.prepare("SELECT id_campeon FROM campeon WHERE apariencion_en_cinematicas = ?1")?;
    let ids = stmt
        .query_map(params![cinematic], |row| row.get::<_, i64>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    drop(stmt);
    for id in &ids {
        tx.execute("DELETE FROM habilidad WHERE id_campeon = ?1", params![id])?;
        tx.execute(
            "DELETE FROM region_campeon WHERE id_campeon = ?1",
            params![id],
        )?;
        tx.execute("DELETE FROM campeon WHERE id_campeon = ?1", params![id])?;
    }
    tx.commit()?;
    Ok(ids.len())
}

/// Delete every ability assigned to the given hotkey. Returns the number
/// removed; zero means no matches.
pub fn delete_abilities_by_hotkey(conn: &Connection, hotkey: char) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "DELETE FROM habilidad WHERE asignacion_de_tecla = ?1",
        params![hotkey.to_string()],
    )?;
    Ok(changed)
}
