//! Command implementations: thin adapters from parsed arguments to the
//! db/import crates, plus result rendering.

use std::path::Path;

use lorebook_catalog::patch::{AbilityPatch, ChampionPatch, RegionPatch};
use lorebook_catalog::types::Region;
use lorebook_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::tables;
use crate::{EntityKind, KeyTarget, PurgeFilter, SchemaAction, UpdateTarget};

// ── Listings and searches ───────────────────────────────────────────────────

/// Champion names per region, in the same order as `regions`.
fn region_members(conn: &Connection, regions: &[Region]) -> Result<Vec<Vec<String>>, CliError> {
    let mut members = Vec::with_capacity(regions.len());
    for region in regions {
        members.push(lorebook_db::champion_names_for_region(conn, region.id)?);
    }
    Ok(members)
}

pub(crate) fn run_list(conn: &Connection, kind: EntityKind) -> Result<(), CliError> {
    match kind {
        EntityKind::Champions => {
            let champions = lorebook_db::list_champions(conn)?;
            print!("{}", tables::champion_table(&champions));
        }
        EntityKind::Regions => {
            let regions = lorebook_db::list_regions(conn)?;
            let members = region_members(conn, &regions)?;
            print!("{}", tables::region_table(&regions, &members));
        }
        EntityKind::Abilities => {
            let abilities = lorebook_db::list_abilities(conn)?;
            print!("{}", tables::ability_table(&abilities));
        }
    }
    Ok(())
}

pub(crate) fn run_search(conn: &Connection, kind: EntityKind, text: &str) -> Result<(), CliError> {
    match kind {
        EntityKind::Champions => {
            let champions = lorebook_db::search_champions_by_text(conn, text)?;
            print!("{}", tables::champion_table(&champions));
        }
        EntityKind::Regions => {
            let regions = lorebook_db::search_regions_by_text(conn, text)?;
            let members = region_members(conn, &regions)?;
            print!("{}", tables::region_table(&regions, &members));
        }
        EntityKind::Abilities => {
            let abilities = lorebook_db::search_abilities_by_text(conn, text)?;
            print!("{}", tables::ability_table(&abilities));
        }
    }
    Ok(())
}

pub(crate) fn run_role(conn: &Connection, role: &str) -> Result<(), CliError> {
    let champions = lorebook_db::champions_by_role(conn, role)?;
    print!("{}", tables::champion_table(&champions));
    Ok(())
}

pub(crate) fn run_stories(conn: &Connection, min: i64) -> Result<(), CliError> {
    let regions = lorebook_db::regions_with_min_stories(conn, min)?;
    let members = region_members(conn, &regions)?;
    print!("{}", tables::region_table(&regions, &members));
    Ok(())
}

pub(crate) fn run_abilities(conn: &Connection, champion_id: i64) -> Result<(), CliError> {
    let abilities = lorebook_db::abilities_for_champion(conn, champion_id)?;
    print!("{}", tables::ability_table(&abilities));
    Ok(())
}

// ── By-key lookup ───────────────────────────────────────────────────────────

pub(crate) fn run_get(conn: &Connection, target: KeyTarget) -> Result<(), CliError> {
    match target {
        KeyTarget::Champion { id } => match lorebook_db::get_champion(conn, id)? {
            Some(champion) => print!("{}", tables::champion_detail(&champion)),
            None => println!("No champion found with id {id}."),
        },
        KeyTarget::Region { id } => match lorebook_db::get_region(conn, id)? {
            Some(region) => {
                let members = lorebook_db::champion_names_for_region(conn, region.id)?;
                print!("{}", tables::region_table(&[region], &[members]));
            }
            None => println!("No region found with id {id}."),
        },
        KeyTarget::Ability { name } => match lorebook_db::get_ability(conn, &name)? {
            Some(ability) => print!("{}", tables::ability_table(&[ability])),
            None => println!("No ability found named '{name}'."),
        },
    }
    Ok(())
}

// ── Update and delete ───────────────────────────────────────────────────────

/// Empty input means "keep the current value", matching the interactive
/// behavior this surface replaces.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn run_update(conn: &Connection, target: UpdateTarget) -> Result<(), CliError> {
    let updated = match target {
        UpdateTarget::Champion {
            id,
            name,
            nickname,
            role,
            difficulty,
        } => {
            let patch = ChampionPatch {
                name: non_empty(name),
                nickname: non_empty(nickname),
                role: non_empty(role),
                difficulty: non_empty(difficulty),
            };
            lorebook_db::update_champion(conn, id, &patch)?
        }
        UpdateTarget::Region {
            id,
            name,
            description,
            stories,
        } => {
            let patch = RegionPatch {
                name: non_empty(name),
                description: non_empty(description),
                story_count: stories,
            };
            lorebook_db::update_region(conn, id, &patch)?
        }
        UpdateTarget::Ability {
            name,
            rename,
            passive,
            hotkey,
            description,
            link,
        } => {
            let patch = AbilityPatch {
                name: non_empty(rename),
                passive,
                hotkey,
                description: non_empty(description),
                link: non_empty(link),
            };
            lorebook_db::update_ability(conn, &name, &patch)?
        }
    };

    if updated {
        println!("Record updated.");
    } else {
        println!("Record not found; nothing updated.");
    }
    Ok(())
}

pub(crate) fn run_delete(conn: &Connection, target: KeyTarget) -> Result<(), CliError> {
    let deleted = match target {
        KeyTarget::Champion { id } => lorebook_db::delete_champion(conn, id)?,
        KeyTarget::Region { id } => lorebook_db::delete_region(conn, id)?,
        KeyTarget::Ability { name } => lorebook_db::delete_ability(conn, &name)?,
    };
    if deleted {
        println!("Record deleted.");
    } else {
        println!("Record not found; nothing deleted.");
    }
    Ok(())
}

pub(crate) fn run_purge(conn: &Connection, filter: PurgeFilter) -> Result<(), CliError> {
    let removed = match filter {
        PurgeFilter::Cinematic { value } => {
            lorebook_db::delete_champions_by_cinematic(conn, &value)?
        }
        PurgeFilter::Hotkey { key } => lorebook_db::delete_abilities_by_hotkey(conn, key)?,
    };
    if removed > 0 {
        println!("Removed {removed} record(s).");
    } else {
        println!("No matches; nothing removed.");
    }
    Ok(())
}

// ── Schema lifecycle ────────────────────────────────────────────────────────

pub(crate) fn run_schema(conn: &Connection, action: SchemaAction) -> Result<(), CliError> {
    match action {
        SchemaAction::Create => {
            lorebook_db::create_schema(conn)?;
            log::info!("Schema created.");
        }
        SchemaAction::Drop => {
            lorebook_db::drop_schema(conn)?;
            log::info!("Schema dropped.");
        }
        SchemaAction::Reset => {
            lorebook_db::drop_schema(conn)?;
            lorebook_db::create_schema(conn)?;
            log::info!("Schema dropped and recreated.");
        }
    }
    Ok(())
}

// ── Import ──────────────────────────────────────────────────────────────────

pub(crate) fn run_import_champions(conn: &Connection, path: &Path) -> Result<(), CliError> {
    let stats = lorebook_import::import_champions(conn, path)?;
    report_import("champion", path, &stats);
    Ok(())
}

pub(crate) fn run_import_regions(conn: &Connection, path: &Path) -> Result<(), CliError> {
    let stats = lorebook_import::import_regions(conn, path)?;
    report_import("region", path, &stats);
    Ok(())
}

pub(crate) fn run_import_abilities(conn: &Connection, path: &Path) -> Result<(), CliError> {
    let stats = lorebook_import::import_abilities(conn, path)?;
    report_import("ability", path, &stats);
    Ok(())
}

/// Import all three files in dependency order: champions first so region
/// tails and ability owners can resolve.
pub(crate) fn run_import_all(
    conn: &Connection,
    champions: &Path,
    regions: &Path,
    abilities: &Path,
) -> Result<(), CliError> {
    run_import_champions(conn, champions)?;
    run_import_regions(conn, regions)?;
    run_import_abilities(conn, abilities)?;
    Ok(())
}

fn report_import(kind: &str, path: &Path, stats: &lorebook_import::ImportStats) {
    log::info!(
        "  {} {}: {} {} row(s) imported, {} skipped ({} bad format, {} bad number)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
        stats.rows_imported,
        kind,
        stats.rows_bad_format + stats.rows_bad_number,
        stats.rows_bad_format,
        stats.rows_bad_number,
    );
    if stats.links_created + stats.links_dropped > 0 {
        log::info!(
            "    {} champion link(s) written, {} unresolved id(s) dropped",
            stats.links_created,
            stats.links_dropped,
        );
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

pub(crate) fn run_stats(conn: &Connection) -> Result<(), CliError> {
    let counts = lorebook_db::catalog_counts(conn)?;
    println!("Champions:     {}", counts.champions);
    println!("Regions:       {}", counts.regions);
    println!("Abilities:     {}", counts.abilities);
    println!("Region links:  {}", counts.region_links);
    Ok(())
}
